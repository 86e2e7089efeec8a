//! Celebration state machine phases.

use super::EffectDescriptor;
use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};

/// Phase of the celebration state machine.
///
/// `Cooldown` is entered when a celebration is cut short because the list
/// stopped being fully completed. Nothing is displayed, and completing the
/// same tasks again does not celebrate until the original auto-reset
/// deadline passes. Adding or deleting a task lifts the block.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CelebrationPhase {
    /// Nothing to show.
    #[default]
    Idle,
    /// A celebration is on screen until `ends_at`.
    Celebrating {
        /// Auto-reset deadline.
        ends_at: DateTime<Utc>,
        /// Effects generated when the celebration started.
        effects: Vec<EffectDescriptor>,
        /// Tasks that were celebrated, in list order.
        task_ids: Vec<TaskId>,
    },
    /// Dismissed early; re-firing for `task_ids` is blocked until `until`.
    Cooldown {
        /// Deadline inherited from the dismissed celebration.
        until: DateTime<Utc>,
        /// Tasks of the dismissed celebration, in list order.
        task_ids: Vec<TaskId>,
    },
}

impl CelebrationPhase {
    /// Returns `true` when no celebration is active or cooling down.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns the instant this phase ends on its own, if it does.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Idle => None,
            Self::Celebrating { ends_at, .. } => Some(*ends_at),
            Self::Cooldown { until, .. } => Some(*until),
        }
    }
}
