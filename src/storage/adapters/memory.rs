//! In-memory implementation of the `KeyValueStore` port.
//!
//! Useful for tests and for hosts that keep state for a single session only.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::storage::ports::{KeyValueStore, StorageError, StorageResult};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what a service wrote.
///
/// # Example
///
/// ```
/// use taskdeck::storage::adapters::memory::InMemoryKeyValueStore;
/// use taskdeck::storage::ports::KeyValueStore;
///
/// let store = InMemoryKeyValueStore::new();
/// store.set("darkMode", "false").expect("in-memory write");
/// assert_eq!(store.get("darkMode").expect("in-memory read").as_deref(), Some("false"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given entries.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(map)),
        }
    }

    /// Returns the number of stored keys.
    ///
    /// Returns zero if the lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or_default()
    }

    /// Returns `true` when no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|err| StorageError::Poisoned(err.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| StorageError::Poisoned(err.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
