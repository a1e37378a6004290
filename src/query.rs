//! Filtered view over the clothing inventory.

use crate::model::{ClothingItem, FilterCriteria};

impl FilterCriteria {
    /// Category, color and search all have to agree.
    ///
    /// Search is a case-insensitive substring match against the name or any
    /// single tag. An empty search matches everything.
    pub fn matches(&self, item: &ClothingItem) -> bool {
        self.category.accepts(item.category)
            && self.color.accepts(item.color)
            && matches_search(&self.search, item)
    }
}

fn matches_search(search: &str, item: &ClothingItem) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    item.name.to_lowercase().contains(&needle)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
}

/// Items matching `criteria`, in collection order.
pub fn filter_items<'a>(items: &'a [ClothingItem], criteria: &FilterCriteria) -> Vec<&'a ClothingItem> {
    items.iter().filter(|item| criteria.matches(item)).collect()
}
