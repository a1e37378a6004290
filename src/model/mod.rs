//! Closet vocabulary: catalog items, outfits, the outfit-canvas and the
//! inventory filter. Plain data, shared by every other module.

mod canvas;
mod filter;
mod item;
mod outfit;

pub use canvas::{OutfitCanvas, Slot};
pub use filter::{CategoryFilter, ColorFilter, FilterCriteria, FilterUpdate};
pub use item::{Category, ClothingItem, Color, NewClothingItem, Season};
pub use outfit::{NewOutfit, Outfit};
