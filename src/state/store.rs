use chrono::Utc;
use serde::de::DeserializeOwned;

use super::persistence::{read_record, write_record, KeyValueStore, MemoryStorage, RecordKeys};
use super::{Action, ClosetState};
use crate::id_generator::generate_id;
use crate::model::{
    ClothingItem, FilterCriteria, FilterUpdate, NewClothingItem, NewOutfit, Outfit, OutfitCanvas, Slot,
};
use crate::query::filter_items;
use crate::suggestion::{suggest_outfits, Suggestion};

/// Owner of the closet state and the only way to change it.
///
/// Every mutation goes through [`ClosetStore::dispatch`]. Actions that change
/// the clothing or outfit collection write that collection back to storage
/// before `dispatch` returns. Write failures are logged and otherwise ignored;
/// the in-memory state stays authoritative.
///
/// Consumers get the store passed in explicitly and read it through shared
/// borrows, so nothing outside can mutate the state behind its back.
pub struct ClosetStore {
    state: ClosetState,
    storage: Box<dyn KeyValueStore>,
    keys: RecordKeys,
    items_status: RecordStatus,
    outfits_status: RecordStatus,
}

/// What hydration found under a record key when the store was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    /// Nothing was ever stored
    Missing,
    Loaded,
    /// Present but undecodable, or written by a newer schema; loaded as empty
    Unreadable,
}

impl std::fmt::Debug for ClosetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosetStore")
            .field("items", &self.state.clothing_items.len())
            .field("outfits", &self.state.outfits.len())
            .field("keys", &self.keys)
            .field("items_status", &self.items_status)
            .field("outfits_status", &self.outfits_status)
            .finish()
    }
}

struct Hydrated<T> {
    data: Vec<T>,
    migrated: bool,
    status: RecordStatus,
}

impl<T> Hydrated<T> {
    fn empty(status: RecordStatus) -> Self {
        Self {
            data: Vec::new(),
            migrated: false,
            status,
        }
    }
}

/// Missing and unreadable records both come back empty.
fn load_collection<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Hydrated<T> {
    match read_record::<T>(storage, key) {
        Ok(Some(record)) => {
            // Rewriting would drop skipped entries, so those records stay as stored
            let migrated = record.needs_migration() && record.skipped == 0;
            if migrated {
                log::info!("Migrating record '{}' from schema version {}", key, record.version);
            }
            if record.skipped > 0 {
                log::warn!("Left {} undecodable entries out of '{}'", record.skipped, key);
            }
            Hydrated {
                data: record.data,
                migrated,
                status: RecordStatus::Loaded,
            }
        }
        Ok(None) => {
            log::debug!("No '{}' record yet, starting empty", key);
            Hydrated::empty(RecordStatus::Missing)
        }
        Err(err) => {
            log::warn!("Ignoring unreadable record '{}': {}", key, err);
            Hydrated::empty(RecordStatus::Unreadable)
        }
    }
}

impl ClosetStore {
    /// Build a store over `storage` and hydrate it from the two records.
    pub fn open(storage: Box<dyn KeyValueStore>, keys: RecordKeys) -> Self {
        let mut store = Self {
            state: ClosetState::default(),
            storage,
            keys,
            items_status: RecordStatus::Missing,
            outfits_status: RecordStatus::Missing,
        };
        store.hydrate();
        store
    }

    /// A store backed by a fresh [`MemoryStorage`]
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryStorage::new()), RecordKeys::default())
    }

    fn hydrate(&mut self) {
        let items = load_collection::<ClothingItem>(&*self.storage, &self.keys.items);
        let outfits = load_collection::<Outfit>(&*self.storage, &self.keys.outfits);
        log::info!(
            "Loaded {} clothing item(s) and {} outfit(s)",
            items.data.len(),
            outfits.data.len()
        );
        self.items_status = items.status;
        self.outfits_status = outfits.status;

        // Hydration bypasses dispatch: an unreadable record must not be
        // overwritten with an empty one just because we started up.
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(Action::LoadData {
            items: items.data,
            outfits: outfits.data,
        });

        if items.migrated {
            self.persist_items();
        }
        if outfits.migrated {
            self.persist_outfits();
        }
    }

    /// Apply `action`, then persist whichever collection it touched.
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("Dispatching {}", action.name());
        let touches_items = action.touches_items();
        let touches_outfits = action.touches_outfits();

        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);

        if touches_items {
            self.persist_items();
        }
        if touches_outfits {
            self.persist_outfits();
        }
    }

    fn persist_items(&mut self) {
        if let Err(err) = write_record(&mut *self.storage, &self.keys.items, &self.state.clothing_items) {
            log::warn!("Failed to persist '{}': {}", self.keys.items, err);
        }
    }

    fn persist_outfits(&mut self) {
        if let Err(err) = write_record(&mut *self.storage, &self.keys.outfits, &self.state.outfits) {
            log::warn!("Failed to persist '{}': {}", self.keys.outfits, err);
        }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &ClosetState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> ClosetState {
        self.state.clone()
    }

    pub fn keys(&self) -> &RecordKeys {
        &self.keys
    }

    /// How the clothing record looked when the store was opened
    pub fn items_status(&self) -> RecordStatus {
        self.items_status
    }

    pub fn outfits_status(&self) -> RecordStatus {
        self.outfits_status
    }

    pub fn clothing_items(&self) -> &[ClothingItem] {
        &self.state.clothing_items
    }

    pub fn outfits(&self) -> &[Outfit] {
        &self.state.outfits
    }

    pub fn current_outfit(&self) -> &OutfitCanvas {
        &self.state.current_outfit
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.state.filter
    }

    pub fn find_item(&self, id: &str) -> Option<&ClothingItem> {
        self.state.clothing_items.iter().find(|item| item.id == id)
    }

    pub fn find_outfit(&self, id: &str) -> Option<&Outfit> {
        self.state.outfits.iter().find(|outfit| outfit.id == id)
    }

    /// Add a catalog item and return the id it was given
    pub fn add_clothing_item(&mut self, item: NewClothingItem) -> String {
        let id = generate_id();
        self.dispatch(Action::AddClothingItem(item.into_item(id.clone(), Utc::now())));
        id
    }

    pub fn remove_clothing_item(&mut self, id: &str) {
        self.dispatch(Action::RemoveClothingItem(id.to_owned()));
    }

    pub fn update_clothing_item(&mut self, item: ClothingItem) {
        self.dispatch(Action::UpdateClothingItem(item));
    }

    /// Save an outfit and return the id it was given
    pub fn add_outfit(&mut self, outfit: NewOutfit) -> String {
        let id = generate_id();
        self.dispatch(Action::AddOutfit(outfit.into_outfit(id.clone(), Utc::now())));
        id
    }

    pub fn remove_outfit(&mut self, id: &str) {
        self.dispatch(Action::RemoveOutfit(id.to_owned()));
    }

    pub fn update_outfit(&mut self, outfit: Outfit) {
        self.dispatch(Action::UpdateOutfit(outfit));
    }

    pub fn place_in_slot(&mut self, slot: Slot, item: ClothingItem) {
        self.dispatch(Action::PlaceInSlot { slot, item });
    }

    pub fn remove_from_slot(&mut self, slot: Slot, item_id: Option<&str>) {
        self.dispatch(Action::RemoveFromSlot {
            slot,
            item_id: item_id.map(str::to_owned),
        });
    }

    pub fn set_canvas(&mut self, canvas: OutfitCanvas) {
        self.dispatch(Action::SetCanvas(canvas));
    }

    pub fn clear_canvas(&mut self) {
        self.dispatch(Action::ClearCanvas);
    }

    /// Snapshot the canvas into a new outfit. The canvas itself is left as
    /// is; clearing it is up to the caller.
    pub fn save_current_outfit(&mut self, name: impl Into<String>, tags: Vec<String>) -> String {
        let items = self.state.current_outfit.clone();
        self.add_outfit(NewOutfit::new(name, items, tags))
    }

    pub fn set_filter(&mut self, update: FilterUpdate) {
        self.dispatch(Action::SetFilter(update));
    }

    pub fn load_data(&mut self, items: Vec<ClothingItem>, outfits: Vec<Outfit>) {
        self.dispatch(Action::LoadData { items, outfits });
    }

    /// Catalog items matching the stored filter, in catalog order
    pub fn filtered_items(&self) -> Vec<ClothingItem> {
        filter_items(&self.state.clothing_items, &self.state.filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Fresh suggestions for the current catalog
    pub fn suggestions(&self) -> Vec<Suggestion> {
        suggest_outfits(&self.state.clothing_items)
    }

    /// Place every suggested item into the slot named by its own category.
    pub fn apply_suggestion(&mut self, suggestion: &Suggestion) {
        for item in &suggestion.items {
            self.place_in_slot(Slot::from(item.category), item.clone());
        }
    }
}
