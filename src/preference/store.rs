//! Dark-mode preference service.

use crate::storage::ports::KeyValueStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Theme used when nothing valid is stored.
pub const DEFAULT_DARK_MODE: bool = true;

/// Owner of the persisted dark-mode flag.
pub struct PreferenceStore<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    key: String,
    dark_mode: bool,
}

impl<S> PreferenceStore<S>
where
    S: KeyValueStore,
{
    /// Loads the flag stored under `key`, defaulting to dark mode (and
    /// writing the default back) when it is missing or unreadable.
    pub fn load(store: Arc<S>, key: impl Into<String>) -> Self {
        let key = key.into();
        let loaded = read_flag(&*store, &key);
        let preference = Self {
            store,
            key,
            dark_mode: loaded.unwrap_or(DEFAULT_DARK_MODE),
        };
        if loaded.is_none() {
            preference.persist();
        }
        preference
    }

    /// Returns `true` when dark mode is on.
    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flips the theme, persists it and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        debug!(dark_mode = self.dark_mode, "theme toggled");
        self.persist();
        self.dark_mode
    }

    fn persist(&self) {
        let encoded = if self.dark_mode { "true" } else { "false" };
        if let Err(err) = self.store.set(&self.key, encoded) {
            warn!(key = %self.key, error = %err, "failed to persist theme preference");
        }
    }
}

fn read_flag(store: &impl KeyValueStore, key: &str) -> Option<bool> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!(key, error = %err, "failed to read theme preference");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(flag) => Some(flag),
        Err(err) => {
            warn!(key, error = %err, "stored theme preference is malformed");
            None
        }
    }
}
