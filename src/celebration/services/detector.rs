//! Edge-triggered "all tasks done" detector.

use crate::celebration::domain::{CelebrationPhase, EffectDescriptor};
use crate::config::CelebrationConfig;
use crate::task::domain::{Task, TaskCollection};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info};

/// Watches task collection changes and fires a one-shot celebration when
/// the list becomes fully completed.
///
/// A celebration starts after an evaluation where the list is non-empty,
/// every task is completed, the completed count grew since the previous
/// evaluation, and the detector is idle. Reaching "all complete" by deleting
/// the remaining open tasks therefore never celebrates.
///
/// Unchecking a task during a celebration hides it at once. Checking it
/// again before the original deadline does not celebrate a second time,
/// unless a task was added or deleted in between.
pub struct CelebrationDetector<C, R>
where
    C: Clock,
    R: Rng,
{
    clock: Arc<C>,
    rng: R,
    config: CelebrationConfig,
    previous_completed: usize,
    phase: CelebrationPhase,
}

impl<C, R> CelebrationDetector<C, R>
where
    C: Clock,
    R: Rng,
{
    /// Creates an idle detector primed with the current collection, so an
    /// already completed list does not celebrate on load.
    pub fn new(clock: Arc<C>, rng: R, config: CelebrationConfig, tasks: &TaskCollection) -> Self {
        Self {
            clock,
            rng,
            config,
            previous_completed: tasks.completed_count(),
            phase: CelebrationPhase::Idle,
        }
    }

    /// Evaluates the collection after a mutation.
    ///
    /// Returns `true` when this evaluation started a celebration.
    pub fn evaluate(&mut self, tasks: &TaskCollection) -> bool {
        let now = self.clock.utc();
        self.expire(now);

        let completed = tasks.completed_count();
        let all_complete = tasks.is_all_complete();
        if !all_complete {
            self.dismiss();
        }
        self.release_if_tasks_changed(tasks);

        let just_completed = all_complete && completed > self.previous_completed;
        let fired = just_completed && self.phase.is_idle();
        if fired {
            self.start(now, tasks);
        }

        self.previous_completed = completed;
        fired
    }

    /// Applies the auto-reset if its deadline has passed.
    ///
    /// Reads already treat an expired celebration as inactive; this only
    /// releases the stored effects and the re-fire block.
    pub fn tick(&mut self) {
        let now = self.clock.utc();
        self.expire(now);
    }

    /// Returns `true` while a celebration should be displayed.
    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.active_effects().is_some()
    }

    /// Returns the effects of the active celebration, empty when idle.
    #[must_use]
    pub fn effects(&self) -> &[EffectDescriptor] {
        self.active_effects().unwrap_or_default()
    }

    /// Returns the raw state machine phase, without applying expiry.
    #[must_use]
    pub const fn phase(&self) -> &CelebrationPhase {
        &self.phase
    }

    /// Returns the completed count recorded by the last evaluation.
    #[must_use]
    pub const fn previous_completed_count(&self) -> usize {
        self.previous_completed
    }

    fn active_effects(&self) -> Option<&[EffectDescriptor]> {
        match &self.phase {
            CelebrationPhase::Celebrating { ends_at, effects, .. } if self.clock.utc() < *ends_at => {
                Some(effects.as_slice())
            }
            _ => None,
        }
    }

    fn start(&mut self, now: DateTime<Utc>, tasks: &TaskCollection) {
        let ends_at = TimeDelta::from_std(self.config.duration())
            .ok()
            .and_then(|delay| now.checked_add_signed(delay))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let effects = EffectDescriptor::batch(self.config.effect_count, &mut self.rng);
        info!(effects = effects.len(), %ends_at, "all tasks completed, celebrating");
        self.phase = CelebrationPhase::Celebrating {
            ends_at,
            effects,
            task_ids: tasks.iter().map(Task::id).collect(),
        };
    }

    fn dismiss(&mut self) {
        let phase = std::mem::take(&mut self.phase);
        self.phase = match phase {
            CelebrationPhase::Celebrating {
                ends_at, task_ids, ..
            } => {
                info!("celebration dismissed, tasks no longer all completed");
                CelebrationPhase::Cooldown {
                    until: ends_at,
                    task_ids,
                }
            }
            other => other,
        };
    }

    fn release_if_tasks_changed(&mut self, tasks: &TaskCollection) {
        let CelebrationPhase::Cooldown { task_ids, .. } = &self.phase else {
            return;
        };
        if !tasks.iter().map(Task::id).eq(task_ids.iter().copied()) {
            debug!("task list changed, celebration cooldown lifted");
            self.phase = CelebrationPhase::Idle;
        }
    }

    fn expire(&mut self, now: DateTime<Utc>) {
        let Some(deadline) = self.phase.deadline() else {
            return;
        };
        if now >= deadline {
            debug!("celebration auto-reset");
            self.phase = CelebrationPhase::Idle;
        }
    }
}
