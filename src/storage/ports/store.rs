//! Key-value store port used by the task and preference services.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Opaque string store standing in for the host's persistent storage.
///
/// Values are stored verbatim; callers own the encoding. Writes are treated
/// as best-effort by every caller in this crate, so implementations should
/// report failures rather than retry.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be read.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The key cannot be mapped onto the backing store.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// Internal state was poisoned by a panicking writer.
    #[error("storage lock poisoned: {0}")]
    Poisoned(String),

    /// Backing-store failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps a backing-store error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
