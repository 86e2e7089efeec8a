//! Opaque string-keyed persistence for widget state.
//!
//! The task list and the theme preference are both persisted as JSON
//! strings under fixed keys. This module owns the storage contract and its
//! adapters:
//!
//! - Port contract in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod ports;

#[cfg(test)]
mod tests;
