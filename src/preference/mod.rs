//! Theme preference persistence.
//!
//! A single dark/light flag with its own storage key and lifecycle,
//! independent of the task list.

mod store;

pub use store::{DEFAULT_DARK_MODE, PreferenceStore};
