//! Port contracts for key-value persistence.

pub mod store;

pub use store::{KeyValueStore, StorageError, StorageResult};
#[cfg(test)]
pub use store::MockKeyValueStore;
