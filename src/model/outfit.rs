use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::OutfitCanvas;

/// A named, saved combination.
///
/// `items` is a value copy of the canvas at save time. Editing or deleting a
/// catalog item later leaves saved outfits untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: OutfitCanvas,
    pub date_created: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// An outfit before the store has given it an id and creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOutfit {
    pub name: String,
    pub items: OutfitCanvas,
    pub tags: Vec<String>,
}

impl NewOutfit {
    pub fn new(name: impl Into<String>, items: OutfitCanvas, tags: Vec<String>) -> Self {
        Self {
            name: name.into(),
            items,
            tags,
        }
    }

    pub fn into_outfit(self, id: String, date_created: DateTime<Utc>) -> Outfit {
        Outfit {
            id,
            name: self.name,
            items: self.items,
            date_created,
            tags: self.tags,
        }
    }
}
