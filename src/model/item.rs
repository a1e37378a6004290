use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The four kinds of garment the closet knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Top,
        Category::Bottom,
        Category::Shoes,
        Category::Accessories,
    ];

    /// Wire name, as stored in records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
            Self::Accessories => "accessories",
        }
    }

    /// Plural label for pickers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Top => "Tops",
            Self::Bottom => "Bottoms",
            Self::Shoes => "Shoes",
            Self::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseError::unknown("category", s))
    }
}

/// Fixed color palette for clothing items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Red,
    Blue,
    Green,
    Yellow,
    Pink,
    Purple,
    Orange,
    Brown,
    Gray,
    Navy,
    Beige,
}

impl Color {
    pub const ALL: [Color; 13] = [
        Color::Black,
        Color::White,
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Pink,
        Color::Purple,
        Color::Orange,
        Color::Brown,
        Color::Gray,
        Color::Navy,
        Color::Beige,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Brown => "brown",
            Self::Gray => "gray",
            Self::Navy => "navy",
            Self::Beige => "beige",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::White => "White",
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Pink => "Pink",
            Self::Purple => "Purple",
            Self::Orange => "Orange",
            Self::Brown => "Brown",
            Self::Gray => "Gray",
            Self::Navy => "Navy",
            Self::Beige => "Beige",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| ParseError::unknown("color", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    #[default]
    All,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
        Season::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|season| season.as_str() == s)
            .ok_or_else(|| ParseError::unknown("season", s))
    }
}

/// A catalog entry.
///
/// `id` and `date_added` are assigned by the store when the item is added and
/// never change afterwards. Updates replace the whole entry by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// File path, URL or data URI
    pub image: String,
    /// Free-text tags, in the order the user typed them
    #[serde(default)]
    pub tags: Vec<String>,
    pub color: Color,
    #[serde(default)]
    pub season: Season,
    pub date_added: DateTime<Utc>,
}

impl ClothingItem {
    /// Exact, case-sensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Everything about a clothing item except what the store assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClothingItem {
    pub name: String,
    pub category: Category,
    pub image: String,
    pub tags: Vec<String>,
    pub color: Color,
    pub season: Season,
}

impl NewClothingItem {
    pub fn new(name: impl Into<String>, category: Category, color: Color) -> Self {
        Self {
            name: name.into(),
            category,
            image: String::new(),
            tags: Vec::new(),
            color,
            season: Season::All,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = season;
        self
    }

    /// Stamp the draft with its identity
    pub fn into_item(self, id: String, date_added: DateTime<Utc>) -> ClothingItem {
        ClothingItem {
            id,
            name: self.name,
            category: self.category,
            image: self.image,
            tags: self.tags,
            color: self.color,
            season: self.season,
            date_added,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_names_round_trip_through_strings() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        for color in Color::ALL {
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
        assert_eq!("all".parse::<Season>(), Ok(Season::All));
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        let err = "hat".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: 'hat'");
        assert!("Black".parse::<Color>().is_err());
        assert!("fall".parse::<Season>().is_err());
    }

    #[test]
    fn test_item_wire_format_uses_camel_case_and_lowercase_enums() {
        let item = NewClothingItem::new("Linen shirt", Category::Top, Color::White)
            .with_tags(["casual", "summer"])
            .with_season(Season::Summer)
            .into_item("abc".to_owned(), DateTime::<Utc>::UNIX_EPOCH);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["category"], "top");
        assert_eq!(json["color"], "white");
        assert_eq!(json["season"], "summer");
        assert_eq!(json["dateAdded"], "1970-01-01T00:00:00Z");
        assert_eq!(json["tags"], serde_json::json!(["casual", "summer"]));
    }

    #[test]
    fn test_missing_tags_and_season_take_defaults() {
        let json = r#"{
            "id": "1",
            "name": "Old boots",
            "category": "shoes",
            "image": "",
            "color": "brown",
            "dateAdded": "2024-03-01T10:00:00.000Z"
        }"#;
        let item: ClothingItem = serde_json::from_str(json).unwrap();
        assert!(item.tags.is_empty());
        assert_eq!(item.season, Season::All);
    }

    #[test]
    fn test_has_tag_is_exact() {
        let item = NewClothingItem::new("Blazer", Category::Top, Color::Navy)
            .with_tags(["Formal"])
            .into_item("b".to_owned(), Utc::now());
        assert!(item.has_tag("Formal"));
        assert!(!item.has_tag("formal"));
    }
}
