use crate::model::{ClothingItem, FilterUpdate, Outfit, OutfitCanvas, Slot};

/// Every state transition the closet knows about.
///
/// Actions carry fully formed values: ids and timestamps are minted by the
/// store before dispatch so that reducing stays deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddClothingItem(ClothingItem),
    /// Remove the item with this id, if any
    RemoveClothingItem(String),
    /// Replace the item that has the same id, if any
    UpdateClothingItem(ClothingItem),
    AddOutfit(Outfit),
    RemoveOutfit(String),
    UpdateOutfit(Outfit),
    /// Replace the whole outfit-canvas
    SetCanvas(OutfitCanvas),
    PlaceInSlot {
        slot: Slot,
        item: ClothingItem,
    },
    RemoveFromSlot {
        slot: Slot,
        item_id: Option<String>,
    },
    ClearCanvas,
    SetFilter(FilterUpdate),
    /// Replace both collections wholesale
    LoadData {
        items: Vec<ClothingItem>,
        outfits: Vec<Outfit>,
    },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddClothingItem(_) => "AddClothingItem",
            Action::RemoveClothingItem(_) => "RemoveClothingItem",
            Action::UpdateClothingItem(_) => "UpdateClothingItem",
            Action::AddOutfit(_) => "AddOutfit",
            Action::RemoveOutfit(_) => "RemoveOutfit",
            Action::UpdateOutfit(_) => "UpdateOutfit",
            Action::SetCanvas(_) => "SetCanvas",
            Action::PlaceInSlot { .. } => "PlaceInSlot",
            Action::RemoveFromSlot { .. } => "RemoveFromSlot",
            Action::ClearCanvas => "ClearCanvas",
            Action::SetFilter(_) => "SetFilter",
            Action::LoadData { .. } => "LoadData",
        }
    }

    /// Whether applying this action rewrites the clothing collection
    pub fn touches_items(&self) -> bool {
        matches!(
            self,
            Action::AddClothingItem(_)
                | Action::RemoveClothingItem(_)
                | Action::UpdateClothingItem(_)
                | Action::LoadData { .. }
        )
    }

    /// Whether applying this action rewrites the outfit collection
    pub fn touches_outfits(&self) -> bool {
        matches!(
            self,
            Action::AddOutfit(_) | Action::RemoveOutfit(_) | Action::UpdateOutfit(_) | Action::LoadData { .. }
        )
    }
}
