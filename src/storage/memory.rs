//! In-memory backend.

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::StorageResult;

/// In-memory store, used when `localStorage` is unavailable and in tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    #[cfg(test)]
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far
    #[cfg(test)]
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        #[cfg(test)]
        {
            self.writes += 1;
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
