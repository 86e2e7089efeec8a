//! Audio cue adapters that need no audio hardware.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::task::ports::{CompletionCue, CompletionTone, CueError};

/// Cue that plays nothing, for hosts without audio output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCue;

impl CompletionCue for SilentCue {
    fn play_completion_cue(&self, _tone: &CompletionTone) -> Result<(), CueError> {
        Ok(())
    }
}

/// Cue that only counts how often it was asked to play.
#[derive(Debug, Default)]
pub struct CountingCue {
    plays: AtomicUsize,
}

impl CountingCue {
    /// Creates a cue with a zero play count.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            plays: AtomicUsize::new(0),
        }
    }

    /// Returns how many times the cue has been played.
    #[must_use]
    pub fn plays(&self) -> usize {
        self.plays.load(Ordering::Relaxed)
    }
}

impl CompletionCue for CountingCue {
    fn play_completion_cue(&self, _tone: &CompletionTone) -> Result<(), CueError> {
        self.plays.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
