//! Read-only view handed to the presentation layer.

use crate::celebration::domain::EffectDescriptor;
use crate::task::domain::Task;
use serde::Serialize;

/// Everything needed to draw the widget at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetSnapshot {
    /// Tasks in insertion order.
    pub tasks: Vec<Task>,
    /// Number of completed tasks.
    pub completed_count: usize,
    /// Completion percentage, `0.0` when the list is empty.
    pub progress_percent: f64,
    /// Whether the "all done" celebration is showing.
    pub celebrating: bool,
    /// Effects of the active celebration; empty when not celebrating.
    pub effects: Vec<EffectDescriptor>,
    /// Whether dark mode is on.
    pub dark_mode: bool,
}

impl WidgetSnapshot {
    /// Returns the total number of tasks.
    #[must_use]
    pub fn total(&self) -> usize {
        self.tasks.len()
    }
}
