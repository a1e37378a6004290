use super::Action;
use crate::model::{ClothingItem, FilterCriteria, Outfit, OutfitCanvas};

/// The whole closet as the application sees it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClosetState {
    pub clothing_items: Vec<ClothingItem>,
    pub outfits: Vec<Outfit>,
    /// The outfit being assembled, not yet saved
    pub current_outfit: OutfitCanvas,
    pub filter: FilterCriteria,
}

impl ClosetState {
    /// Apply one action and hand back the next state.
    ///
    /// Pure: no ids, clocks or storage are touched here. Targets that cannot
    /// be found make the action a no-op.
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::AddClothingItem(item) => self.clothing_items.push(item),
            Action::RemoveClothingItem(id) => self.clothing_items.retain(|item| item.id != id),
            Action::UpdateClothingItem(item) => {
                replace_matching(&mut self.clothing_items, item, |a, b| a.id == b.id)
            }
            Action::AddOutfit(outfit) => self.outfits.push(outfit),
            Action::RemoveOutfit(id) => self.outfits.retain(|outfit| outfit.id != id),
            Action::UpdateOutfit(outfit) => {
                replace_matching(&mut self.outfits, outfit, |a, b| a.id == b.id)
            }
            Action::SetCanvas(canvas) => self.current_outfit = canvas,
            Action::PlaceInSlot { slot, item } => self.current_outfit.place(slot, item),
            Action::RemoveFromSlot { slot, item_id } => {
                self.current_outfit.remove(slot, item_id.as_deref())
            }
            Action::ClearCanvas => self.current_outfit = OutfitCanvas::default(),
            Action::SetFilter(update) => self.filter.merge(update),
            Action::LoadData { items, outfits } => {
                self.clothing_items = items;
                self.outfits = outfits;
            }
        }
        self
    }
}

fn replace_matching<T: Clone>(entries: &mut [T], replacement: T, same: impl Fn(&T, &T) -> bool) {
    for entry in entries.iter_mut() {
        if same(entry, &replacement) {
            *entry = replacement.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Color, NewClothingItem, NewOutfit, Slot};
    use chrono::Utc;

    fn item(id: &str, category: Category) -> ClothingItem {
        NewClothingItem::new(id, category, Color::Black).into_item(id.to_owned(), Utc::now())
    }

    fn state_with(ids: &[&str]) -> ClosetState {
        ids.iter().fold(ClosetState::default(), |state, id| {
            state.reduce(Action::AddClothingItem(item(id, Category::Top)))
        })
    }

    #[test]
    fn test_removing_unknown_id_changes_nothing() {
        let state = state_with(&["a", "b", "c"]);
        let after = state.clone().reduce(Action::RemoveClothingItem("zzz".to_owned()));
        assert_eq!(after, state);

        let after = state.clone().reduce(Action::RemoveOutfit("zzz".to_owned()));
        assert_eq!(after, state);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let state = state_with(&["a", "b", "c"]);
        let mut renamed = state.clothing_items[1].clone();
        renamed.name = "Renamed".to_owned();

        let after = state.reduce(Action::UpdateClothingItem(renamed));
        let names: Vec<_> = after.clothing_items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["a", "Renamed", "c"]);
    }

    #[test]
    fn test_update_of_unknown_outfit_is_noop() {
        let outfit = NewOutfit::new("Lost", OutfitCanvas::default(), vec![])
            .into_outfit("missing".to_owned(), Utc::now());
        let after = ClosetState::default().reduce(Action::UpdateOutfit(outfit));
        assert!(after.outfits.is_empty());
    }

    #[test]
    fn test_clear_canvas_resets_to_empty_shape() {
        let state = ClosetState::default()
            .reduce(Action::PlaceInSlot {
                slot: Slot::Top,
                item: item("t", Category::Top),
            })
            .reduce(Action::PlaceInSlot {
                slot: Slot::Accessories,
                item: item("a", Category::Accessories),
            })
            .reduce(Action::ClearCanvas);
        assert_eq!(state.current_outfit, OutfitCanvas::default());
    }

    #[test]
    fn test_load_data_replaces_collections_but_keeps_canvas() {
        let state = state_with(&["old"]).reduce(Action::PlaceInSlot {
            slot: Slot::Shoes,
            item: item("s", Category::Shoes),
        });
        let after = state.reduce(Action::LoadData {
            items: vec![item("new", Category::Bottom)],
            outfits: vec![],
        });
        assert_eq!(after.clothing_items.len(), 1);
        assert_eq!(after.clothing_items[0].id, "new");
        assert!(after.current_outfit.shoes.is_some());
    }
}
