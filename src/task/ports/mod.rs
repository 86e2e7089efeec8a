//! Port contracts for task list side effects.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod cue;

pub use cue::{CompletionCue, CompletionTone, CueError};
#[cfg(test)]
pub use cue::MockCompletionCue;
