#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod id_generator;
pub mod model;
pub mod panels;
pub mod query;
pub mod sample_data;
pub mod state;
pub mod suggestion;
pub mod thumbnails;

pub use app::ClosetApp;
pub use config::ClosetConfig;
pub use error::ParseError;
pub use model::{
    Category, CategoryFilter, ClothingItem, Color, ColorFilter, FilterCriteria, FilterUpdate, NewClothingItem,
    NewOutfit, Outfit, OutfitCanvas, Season, Slot,
};
pub use query::filter_items;
pub use state::{
    Action, ClosetState, ClosetStore, KeyValueStore, MemoryStorage, PersistenceError, RecordKeys, RecordStatus,
};
pub use suggestion::{suggest_outfits, Suggestion, SuggestionRule};
