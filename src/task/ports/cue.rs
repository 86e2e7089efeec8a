//! Audio cue port played when a task becomes completed.

use std::time::Duration;
use thiserror::Error;

/// Description of the short "ding" played on completion.
///
/// A sine tone sweeping down in pitch while fading out. Synthesis is left to
/// the host; this only describes the sound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionTone {
    /// Frequency at the start of the tone, in hertz.
    pub start_frequency_hz: f32,
    /// Frequency reached at the end of the sweep, in hertz.
    pub end_frequency_hz: f32,
    /// Duration of the frequency sweep.
    pub sweep: Duration,
    /// Gain at the start of the tone.
    pub start_gain: f32,
    /// Gain reached when the tone ends.
    pub end_gain: f32,
    /// Total length of the tone.
    pub length: Duration,
}

impl CompletionTone {
    /// The tone used for task completion.
    pub const STANDARD: Self = Self {
        start_frequency_hz: 800.0,
        end_frequency_hz: 400.0,
        sweep: Duration::from_millis(100),
        start_gain: 0.3,
        end_gain: 0.01,
        length: Duration::from_millis(300),
    };
}

impl Default for CompletionTone {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Fire-and-forget audio collaborator.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionCue: Send + Sync {
    /// Plays the completion tone.
    ///
    /// # Errors
    ///
    /// Returns [`CueError`] when audio output is unavailable. Callers log
    /// the failure and carry on.
    fn play_completion_cue(&self, tone: &CompletionTone) -> Result<(), CueError>;
}

/// Errors reported by audio cue implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CueError {
    /// No audio output is available on the host.
    #[error("audio output unavailable: {0}")]
    Unavailable(String),
}
