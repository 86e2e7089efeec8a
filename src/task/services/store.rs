//! Task store service: owns the collection and persists every change.

use crate::storage::ports::KeyValueStore;
use crate::task::{
    domain::{Priority, Task, TaskCollection, TaskId, TaskText},
    ports::{CompletionCue, CompletionTone},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Owner of the ordered task collection.
///
/// Invalid input (blank text, unknown ids) is ignored rather than reported,
/// and persistence is best-effort: failed reads fall back to the sample
/// tasks and failed writes are logged.
pub struct TaskStore<S, C, A>
where
    S: KeyValueStore,
    C: Clock,
    A: CompletionCue,
{
    store: Arc<S>,
    clock: Arc<C>,
    cue: Arc<A>,
    key: String,
    tasks: TaskCollection,
    last_issued: Option<TaskId>,
}

impl<S, C, A> TaskStore<S, C, A>
where
    S: KeyValueStore,
    C: Clock,
    A: CompletionCue,
{
    /// Loads the collection stored under `key`.
    ///
    /// Seeds the three sample tasks (and writes them back) when nothing is
    /// stored or the stored value cannot be read.
    pub fn load(store: Arc<S>, clock: Arc<C>, cue: Arc<A>, key: impl Into<String>) -> Self {
        let key = key.into();
        let loaded = read_collection(&*store, &key);
        let was_seeded = loaded.is_none();
        let tasks = loaded.unwrap_or_else(TaskCollection::seeded);
        let last_issued = tasks.max_id();
        let task_store = Self {
            store,
            clock,
            cue,
            key,
            tasks,
            last_issued,
        };
        if was_seeded {
            debug!(key = %task_store.key, "seeding sample tasks");
            task_store.persist();
        }
        task_store
    }

    /// Appends a new incomplete task.
    ///
    /// Returns the new task's identifier, or `None` when `text` is blank.
    pub fn add(&mut self, text: impl Into<String>, priority: Priority) -> Option<TaskId> {
        let Ok(valid_text) = TaskText::new(text) else {
            debug!("ignoring task with blank text");
            return None;
        };
        let Some(id) = self.next_id() else {
            warn!("no task identifier available, task not added");
            return None;
        };
        if let Err(err) = self.tasks.push(Task::new(id, valid_text, priority)) {
            warn!(error = %err, "task identifier collision, task not added");
            return None;
        }
        self.last_issued = self.last_issued.max(Some(id));
        debug!(task_id = %id, %priority, "task added");
        self.persist();
        Some(id)
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Plays the completion cue when the task becomes completed. Returns the
    /// new completion value, or `None` when no such task exists.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let Some(completed) = self.tasks.toggle(id) else {
            debug!(task_id = %id, "ignoring toggle of unknown task");
            return None;
        };
        if completed {
            self.play_cue();
        }
        debug!(task_id = %id, completed, "task toggled");
        self.persist();
        Some(completed)
    }

    /// Removes the task with `id`, returning it when it existed.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let Some(removed) = self.tasks.remove(id) else {
            debug!(task_id = %id, "ignoring delete of unknown task");
            return None;
        };
        debug!(task_id = %id, "task deleted");
        self.persist();
        Some(removed)
    }

    /// Returns the current collection.
    #[must_use]
    pub const fn tasks(&self) -> &TaskCollection {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when there are no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.completed_count()
    }

    /// Returns the completion percentage, `0.0` when empty.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.tasks.progress_percent()
    }

    /// Picks an identifier from the clock that is strictly greater than any
    /// identifier issued or present so far.
    ///
    /// Once `u64::MAX` has been reached, the smallest free identifier is
    /// reused instead.
    fn next_id(&self) -> Option<TaskId> {
        let now = u64::try_from(self.clock.utc().timestamp_millis()).unwrap_or_default();
        let candidate = TaskId::new(now);
        let floor = self.last_issued.max(self.tasks.max_id());
        match floor {
            Some(highest) if candidate <= highest => highest
                .checked_successor()
                .or_else(|| self.tasks.lowest_unused_id()),
            _ => Some(candidate),
        }
    }

    fn play_cue(&self) {
        if let Err(err) = self.cue.play_completion_cue(&CompletionTone::STANDARD) {
            warn!(error = %err, "completion cue failed");
        }
    }

    fn persist(&self) {
        let encoded = match serde_json::to_string(&self.tasks) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(error = %err, "failed to encode tasks");
                return;
            }
        };
        if let Err(err) = self.store.set(&self.key, &encoded) {
            warn!(key = %self.key, error = %err, "failed to persist tasks");
        }
    }
}

/// Reads and decodes the stored collection, returning `None` when it is
/// missing or unreadable.
fn read_collection(store: &impl KeyValueStore, key: &str) -> Option<TaskCollection> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!(key, error = %err, "failed to read stored tasks");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(tasks) => Some(tasks),
        Err(err) => {
            warn!(key, error = %err, "stored tasks are malformed, using sample tasks");
            None
        }
    }
}
