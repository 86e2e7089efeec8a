//! Adapter implementations for task list ports.

pub mod cue;
