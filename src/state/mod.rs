mod action;
mod closet_state;
mod persistence;
mod store;

pub use action::Action;
pub use closet_state::ClosetState;
#[cfg(target_arch = "wasm32")]
pub use persistence::LocalStorage;
pub use persistence::{
    read_record, write_record, FileStorage, KeyValueStore, LoadedRecord, MemoryStorage, PersistenceError,
    PersistenceResult, RecordKeys, SCHEMA_VERSION,
};
pub use store::{ClosetStore, RecordStatus};
