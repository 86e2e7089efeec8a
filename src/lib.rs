//! Taskdeck: the state core of a single-user task list widget.
//!
//! Users add, complete and delete short prioritised tasks. Progress is
//! derived from the list, an "all done" celebration fires when the list
//! becomes fully completed, and both the list and the theme preference are
//! persisted across sessions. Rendering, animation and audio synthesis are
//! left to the host.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage, audio)
//!
//! # Modules
//!
//! - [`task`]: Task collection, completion cue and the task store
//! - [`celebration`]: Edge-triggered "all tasks done" detection
//! - [`preference`]: Persisted dark-mode flag
//! - [`storage`]: Key-value persistence port and adapters
//! - [`widget`]: Composition root and presentation snapshot
//! - [`config`]: Storage keys and celebration tuning

pub mod celebration;
pub mod config;
pub mod preference;
pub mod storage;
pub mod task;
pub mod widget;

#[cfg(test)]
#[path = "../tests/test_helpers/mod.rs"]
mod test_support;
