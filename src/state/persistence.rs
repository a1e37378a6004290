use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version written into every record envelope.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors that can occur while reading or writing closet records
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize record: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to access storage: {0}")]
    IoError(#[from] io::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Record '{key}' has schema version {found}, newest supported is {supported}")]
    UnsupportedVersion {
        key: String,
        found: u32,
        supported: u32,
    },
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Names of the two records the closet keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordKeys {
    pub items: String,
    pub outfits: String,
}

impl Default for RecordKeys {
    fn default() -> Self {
        Self {
            items: "closet-items".to_owned(),
            outfits: "closet-outfits".to_owned(),
        }
    }
}

/// A durable string-to-string medium.
pub trait KeyValueStore {
    /// `Ok(None)` when nothing was ever stored under `key`
    fn get(&self, key: &str) -> PersistenceResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()>;
}

/// In-process storage. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value under `key`, bypassing the record format
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    /// Store a raw value, bypassing the record format
    pub fn insert_raw(&self, key: &str, value: impl Into<String>) {
        self.entries.lock().insert(key.to_owned(), value.into());
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()> {
        self.insert_raw(key, value);
        Ok(())
    }
}

/// One `<key>.json` file per record inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()> {
        fs::create_dir_all(&self.dir)?;

        // Write next to the target and rename, so a crash never leaves half a record
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(tmp, path)?;
        Ok(())
    }
}

/// The browser's `localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// `None` when the page has no window or storage is disabled
    pub fn new() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|err| PersistenceError::Backend(format!("{:?}", err)))
    }

    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|err| PersistenceError::Backend(format!("{:?}", err)))
    }
}

#[derive(Serialize)]
struct RecordEnvelope<'a, T> {
    version: u32,
    data: &'a [T],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredRecord {
    Versioned { version: u32, data: Vec<serde_json::Value> },
    /// Bare array written before records carried a version
    Legacy(Vec<serde_json::Value>),
}

/// A record as read back from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecord<T> {
    pub data: Vec<T>,
    /// 0 for legacy bare-array records
    pub version: u32,
    /// Entries that could not be decoded and were left out of `data`
    pub skipped: usize,
}

impl<T> LoadedRecord<T> {
    pub fn needs_migration(&self) -> bool {
        self.version < SCHEMA_VERSION
    }
}

/// Read and decode the record under `key`.
///
/// Legacy records decode with serde defaults filling fields they lack
/// (`tags`, `season`, `accessories`); that is the whole migration.
///
/// Entries are decoded one at a time. An entry that does not decode (an
/// unknown color, say) is logged and skipped so the rest of the collection
/// still loads. Skipped entries are gone from the record once the collection
/// is next written.
pub fn read_record<T: DeserializeOwned>(
    storage: &dyn KeyValueStore,
    key: &str,
) -> PersistenceResult<Option<LoadedRecord<T>>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };

    let (version, entries) = match serde_json::from_str::<StoredRecord>(&raw)? {
        StoredRecord::Versioned { version, data } => (version, data),
        StoredRecord::Legacy(data) => (0, data),
    };

    if version > SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            key: key.to_owned(),
            found: version,
            supported: SCHEMA_VERSION,
        });
    }

    let mut data = Vec::with_capacity(entries.len());
    let mut skipped = 0;
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<T>(entry) {
            Ok(value) => data.push(value),
            Err(err) => {
                log::warn!("Skipping entry {} of record '{}': {}", index, key, err);
                skipped += 1;
            }
        }
    }

    Ok(Some(LoadedRecord { data, version, skipped }))
}

/// Encode `data` in the current record format and store it under `key`
pub fn write_record<T: Serialize>(
    storage: &mut dyn KeyValueStore,
    key: &str,
    data: &[T],
) -> PersistenceResult<()> {
    let json = serde_json::to_string(&RecordEnvelope {
        version: SCHEMA_VERSION,
        data,
    })?;
    storage.set(key, &json)
}
