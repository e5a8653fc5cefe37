//! Storage Layer
//!
//! Key-value persistence abstraction plus generic JSON load/save helpers.
//! Backends: browser `localStorage` and an in-memory map.

mod browser;
mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StorageError, StorageResult};

pub use browser::BrowserStorage;
pub use memory::MemoryStore;

/// String key-value store
pub trait KeyValueStore {
    /// Read the raw value under `key`, `None` if absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the raw value under `key`
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

/// Open `localStorage`, falling back to an in-memory store when the
/// browser refuses access (e.g. storage disabled).
pub fn open_default_store() -> Box<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("[STORAGE] {}; changes will not survive a reload", e);
            Box::new(MemoryStore::new())
        }
    }
}

/// Load and deserialize the value under `key`.
///
/// Missing, unreadable and malformed values all yield `None`; the latter two
/// are logged so corruption can be told apart from first use.
pub fn load_data<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::debug!("[STORAGE] No data under {}", key);
            return None;
        }
        Err(e) => {
            log::warn!("[STORAGE] {}", e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[STORAGE] Ignoring malformed data under {}: {}", key, e);
            None
        }
    }
}

/// Serialize `value` as JSON and write it under `key`
pub fn save_data<T, S>(store: &mut S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    store.set(key, &raw)
}
