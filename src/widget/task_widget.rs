//! The widget service driving the user-facing commands.

use crate::celebration::services::CelebrationDetector;
use crate::config::WidgetConfig;
use crate::preference::PreferenceStore;
use crate::storage::ports::KeyValueStore;
use crate::task::{
    domain::{Priority, Task, TaskId},
    ports::CompletionCue,
    services::TaskStore,
};
use mockable::Clock;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::Arc;

use super::WidgetSnapshot;

/// External collaborators the widget is wired to.
#[derive(Debug)]
pub struct WidgetPorts<S, C, A> {
    /// Persistent key-value storage shared by tasks and preferences.
    pub store: Arc<S>,
    /// Time source for task ids and the celebration timer.
    pub clock: Arc<C>,
    /// Audio collaborator for the completion cue.
    pub cue: Arc<A>,
}

impl<S, C, A> WidgetPorts<S, C, A> {
    /// Bundles the collaborators.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>, cue: Arc<A>) -> Self {
        Self { store, clock, cue }
    }
}

/// Single-user task list with progress, celebration and theme state.
///
/// Commands are processed one at a time; each task command that changes the
/// list is followed by a celebration evaluation.
pub struct TaskWidget<S, C, A, R>
where
    S: KeyValueStore,
    C: Clock,
    A: CompletionCue,
    R: Rng,
{
    tasks: TaskStore<S, C, A>,
    celebration: CelebrationDetector<C, R>,
    preference: PreferenceStore<S>,
}

impl<S, C, A> TaskWidget<S, C, A, StdRng>
where
    S: KeyValueStore,
    C: Clock,
    A: CompletionCue,
{
    /// Loads the widget with an entropy-seeded random source for effects.
    pub fn load_with_entropy(ports: WidgetPorts<S, C, A>, config: &WidgetConfig) -> Self {
        Self::load(ports, StdRng::from_entropy(), config)
    }
}

impl<S, C, A, R> TaskWidget<S, C, A, R>
where
    S: KeyValueStore,
    C: Clock,
    A: CompletionCue,
    R: Rng,
{
    /// Loads persisted tasks and preferences and primes the detector.
    pub fn load(ports: WidgetPorts<S, C, A>, rng: R, config: &WidgetConfig) -> Self {
        let WidgetPorts { store, clock, cue } = ports;
        let tasks = TaskStore::load(
            Arc::clone(&store),
            Arc::clone(&clock),
            cue,
            config.tasks_key.as_str(),
        );
        let celebration = CelebrationDetector::new(clock, rng, config.celebration, tasks.tasks());
        let preference = PreferenceStore::load(store, config.dark_mode_key.as_str());
        Self {
            tasks,
            celebration,
            preference,
        }
    }

    /// Adds a task; blank text is ignored.
    pub fn add_task(&mut self, text: impl Into<String>, priority: Priority) -> Option<TaskId> {
        let added = self.tasks.add(text, priority);
        if added.is_some() {
            self.evaluate();
        }
        added
    }

    /// Toggles a task's completion; unknown ids are ignored.
    pub fn toggle_task(&mut self, id: TaskId) -> Option<bool> {
        let toggled = self.tasks.toggle(id);
        if toggled.is_some() {
            self.evaluate();
        }
        toggled
    }

    /// Deletes a task; unknown ids are ignored.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.tasks.delete(id);
        if removed.is_some() {
            self.evaluate();
        }
        removed
    }

    /// Flips between dark and light mode, returning the new dark-mode flag.
    pub fn toggle_theme(&mut self) -> bool {
        self.preference.toggle()
    }

    /// Applies the celebration auto-reset if it is due.
    pub fn tick(&mut self) {
        self.celebration.tick();
    }

    /// Returns a read-only view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot {
            tasks: self.tasks.tasks().as_slice().to_vec(),
            completed_count: self.tasks.completed_count(),
            progress_percent: self.tasks.progress_percent(),
            celebrating: self.celebration.is_celebrating(),
            effects: self.celebration.effects().to_vec(),
            dark_mode: self.preference.dark_mode(),
        }
    }

    /// Returns the task store.
    #[must_use]
    pub const fn tasks(&self) -> &TaskStore<S, C, A> {
        &self.tasks
    }

    /// Returns the celebration detector.
    #[must_use]
    pub const fn celebration(&self) -> &CelebrationDetector<C, R> {
        &self.celebration
    }

    /// Returns the theme preference store.
    #[must_use]
    pub const fn preference(&self) -> &PreferenceStore<S> {
        &self.preference
    }

    fn evaluate(&mut self) {
        self.celebration.evaluate(self.tasks.tasks());
    }
}
