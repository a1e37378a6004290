use crate::model::{Category, Color, NewClothingItem, Season};
use crate::state::{ClosetStore, RecordStatus};

/// A small starter wardrobe covering the black color rule and both tag rules.
pub fn sample_catalog() -> Vec<NewClothingItem> {
    vec![
        NewClothingItem::new("White T-Shirt", Category::Top, Color::White)
            .with_tags(["casual", "basic"])
            .with_season(Season::Summer),
        NewClothingItem::new("Black Blazer", Category::Top, Color::Black).with_tags(["formal", "work"]),
        NewClothingItem::new("Denim Jacket", Category::Top, Color::Blue)
            .with_tags(["casual"])
            .with_season(Season::Autumn),
        NewClothingItem::new("Blue Jeans", Category::Bottom, Color::Blue).with_tags(["casual", "denim"]),
        NewClothingItem::new("Black Trousers", Category::Bottom, Color::Black).with_tags(["formal", "work"]),
        NewClothingItem::new("White Sneakers", Category::Shoes, Color::White).with_tags(["casual", "sport"]),
        NewClothingItem::new("Black Oxford Shoes", Category::Shoes, Color::Black).with_tags(["formal"]),
        NewClothingItem::new("Leather Belt", Category::Accessories, Color::Black).with_tags(["formal"]),
        NewClothingItem::new("Canvas Tote", Category::Accessories, Color::Beige).with_tags(["casual"]),
    ]
}

/// Add the sample catalog to a closet that has never stored any items.
/// Returns how many were added.
///
/// A record that exists but could not be read also hydrates as empty; it is
/// left alone so seeding does not write over it.
pub fn seed_if_empty(store: &mut ClosetStore) -> usize {
    if store.items_status() != RecordStatus::Missing {
        log::debug!("Items record present ({:?}), not seeding", store.items_status());
        return 0;
    }
    if !store.clothing_items().is_empty() {
        return 0;
    }
    let catalog = sample_catalog();
    let count = catalog.len();
    for item in catalog {
        store.add_clothing_item(item);
    }
    log::info!("Seeded empty closet with {} sample item(s)", count);
    count
}
