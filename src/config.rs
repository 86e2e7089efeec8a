//! Widget configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Storage key for the task collection.
pub const DEFAULT_TASKS_KEY: &str = "tasks";
/// Storage key for the dark-mode preference.
pub const DEFAULT_DARK_MODE_KEY: &str = "darkMode";
/// How long a celebration stays on screen, in milliseconds.
pub const DEFAULT_CELEBRATION_MS: u64 = 5_000;
/// Number of effect descriptors generated per celebration.
pub const DEFAULT_EFFECT_COUNT: usize = 50;

/// Error returned when a configuration document cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid widget configuration: {0}")]
pub struct ConfigError(#[from] serde_json::Error);

/// Celebration tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    /// Auto-reset delay in milliseconds.
    pub duration_ms: u64,
    /// Effect descriptors generated when a celebration starts.
    pub effect_count: usize,
}

impl CelebrationConfig {
    /// Returns the auto-reset delay.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_CELEBRATION_MS,
            effect_count: DEFAULT_EFFECT_COUNT,
        }
    }
}

/// Top-level widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Key the task collection is persisted under.
    pub tasks_key: String,
    /// Key the dark-mode flag is persisted under.
    pub dark_mode_key: String,
    /// Celebration tuning.
    pub celebration: CelebrationConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            tasks_key: DEFAULT_TASKS_KEY.to_owned(),
            dark_mode_key: DEFAULT_DARK_MODE_KEY.to_owned(),
            celebration: CelebrationConfig::default(),
        }
    }
}

impl WidgetConfig {
    /// Parses a JSON configuration document; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Sets the celebration tuning.
    #[must_use]
    pub const fn with_celebration(mut self, celebration: CelebrationConfig) -> Self {
        self.celebration = celebration;
        self
    }
}
