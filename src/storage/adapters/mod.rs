//! Adapter implementations for the key-value store port.

pub mod directory;
pub mod memory;
