//! Task entity and its priority.

use super::{ParsePriorityError, TaskId, TaskText};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// The default for new tasks.
    #[default]
    Medium,
    /// Should be done first.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Parses the stored lowercase form, as produced by [`Priority::as_str`].
impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single to-do item.
///
/// Serializes to `{ "id", "text", "completed", "priority" }`, which is also
/// the persisted format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: TaskText,
    completed: bool,
    priority: Priority,
}

impl Task {
    /// Creates a new, incomplete task.
    #[must_use]
    pub const fn new(id: TaskId, text: TaskText, priority: Priority) -> Self {
        Self {
            id,
            text,
            completed: false,
            priority,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task text.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Flips the completion flag and returns the new value.
    pub const fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
