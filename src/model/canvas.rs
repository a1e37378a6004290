use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Category, ClothingItem};
use crate::error::ParseError;

/// An outfit position. Three hold a single item, `Accessories` holds a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Top,
    Bottom,
    Shoes,
    Accessories,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Top, Slot::Bottom, Slot::Shoes, Slot::Accessories];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
            Self::Accessories => "accessories",
        }
    }

    pub fn is_singular(&self) -> bool {
        !matches!(self, Self::Accessories)
    }
}

impl From<Category> for Slot {
    fn from(category: Category) -> Self {
        match category {
            Category::Top => Self::Top,
            Category::Bottom => Self::Bottom,
            Category::Shoes => Self::Shoes,
            Category::Accessories => Self::Accessories,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| ParseError::unknown("slot", s))
    }
}

/// Slot assignments of an outfit, either in progress or saved.
///
/// Items are held by value. Slots do not check the category of what is put
/// into them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutfitCanvas {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<ClothingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<ClothingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoes: Option<ClothingItem>,
    #[serde(default)]
    pub accessories: Vec<ClothingItem>,
}

impl OutfitCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accessories are appended, singular slots are overwritten.
    pub fn place(&mut self, slot: Slot, item: ClothingItem) {
        match slot {
            Slot::Top => self.top = Some(item),
            Slot::Bottom => self.bottom = Some(item),
            Slot::Shoes => self.shoes = Some(item),
            Slot::Accessories => self.accessories.push(item),
        }
    }

    /// Singular slots are cleared whatever `item_id` says. For accessories
    /// every entry with `item_id` is dropped; no id means nothing to drop.
    pub fn remove(&mut self, slot: Slot, item_id: Option<&str>) {
        match slot {
            Slot::Top => self.top = None,
            Slot::Bottom => self.bottom = None,
            Slot::Shoes => self.shoes = None,
            Slot::Accessories => {
                if let Some(id) = item_id {
                    self.accessories.retain(|accessory| accessory.id != id);
                }
            }
        }
    }

    pub fn slot(&self, slot: Slot) -> Vec<&ClothingItem> {
        match slot {
            Slot::Top => self.top.iter().collect(),
            Slot::Bottom => self.bottom.iter().collect(),
            Slot::Shoes => self.shoes.iter().collect(),
            Slot::Accessories => self.accessories.iter().collect(),
        }
    }

    /// All placed items: top, bottom, shoes, then accessories in order.
    pub fn items(&self) -> impl Iterator<Item = &ClothingItem> {
        self.top
            .iter()
            .chain(self.bottom.iter())
            .chain(self.shoes.iter())
            .chain(self.accessories.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, NewClothingItem};
    use chrono::Utc;

    fn item(id: &str, category: Category) -> ClothingItem {
        NewClothingItem::new(id, category, Color::Black).into_item(id.to_owned(), Utc::now())
    }

    #[test]
    fn test_singular_slot_keeps_last_placement() {
        let mut canvas = OutfitCanvas::new();
        canvas.place(Slot::Top, item("t1", Category::Top));
        canvas.place(Slot::Top, item("t2", Category::Top));
        assert_eq!(canvas.top.as_ref().map(|t| t.id.as_str()), Some("t2"));
    }

    #[test]
    fn test_singular_slot_removal_ignores_id() {
        let mut canvas = OutfitCanvas::new();
        canvas.place(Slot::Shoes, item("s1", Category::Shoes));
        canvas.remove(Slot::Shoes, Some("something-else"));
        assert!(canvas.shoes.is_none());
    }

    #[test]
    fn test_accessory_removal_without_id_is_noop() {
        let mut canvas = OutfitCanvas::new();
        canvas.place(Slot::Accessories, item("a1", Category::Accessories));
        canvas.remove(Slot::Accessories, None);
        assert_eq!(canvas.accessories.len(), 1);
    }

    #[test]
    fn test_slots_accept_mismatched_categories() {
        let mut canvas = OutfitCanvas::new();
        canvas.place(Slot::Top, item("s1", Category::Shoes));
        assert_eq!(canvas.slot(Slot::Top).len(), 1);
    }

    #[test]
    fn test_items_walks_slots_in_order() {
        let mut canvas = OutfitCanvas::new();
        assert!(canvas.is_empty());
        canvas.place(Slot::Accessories, item("a", Category::Accessories));
        canvas.place(Slot::Shoes, item("s", Category::Shoes));
        canvas.place(Slot::Top, item("t", Category::Top));
        let ids: Vec<_> = canvas.items().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["t", "s", "a"]);
    }

    #[test]
    fn test_empty_slots_are_omitted_on_the_wire() {
        let json = serde_json::to_value(OutfitCanvas::new()).unwrap();
        assert_eq!(json, serde_json::json!({ "accessories": [] }));

        let canvas: OutfitCanvas = serde_json::from_str("{}").unwrap();
        assert!(canvas.accessories.is_empty());
    }
}
