//! Ordered task collection and its derived progress figures.

use super::{Priority, Task, TaskDomainError, TaskId, TaskText};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sample tasks shown the first time the widget is opened.
const SEED_TASKS: [(u64, &str, Priority); 3] = [
    (1, "Review email", Priority::High),
    (2, "Team meeting at 3", Priority::Medium),
    (3, "Finish the monthly report", Priority::High),
];

/// Tasks in insertion order with unique identifiers.
///
/// Completion and priority never reorder the collection. The persisted form
/// is the plain JSON array of tasks; deserializing rejects duplicate ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Task>", into = "Vec<Task>")]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Creates the three-task sample collection, all incomplete.
    #[must_use]
    pub fn seeded() -> Self {
        let tasks = SEED_TASKS
            .into_iter()
            .filter_map(|(id, text, priority)| {
                TaskText::new(text)
                    .ok()
                    .map(|valid| Task::new(TaskId::new(id), valid, priority))
            })
            .collect();
        Self { tasks }
    }

    /// Builds a collection from tasks, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DuplicateTaskId`] when two tasks share an
    /// identifier.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, TaskDomainError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        if let Some(duplicate) = tasks.iter().find(|task| !seen.insert(task.id())) {
            return Err(TaskDomainError::DuplicateTaskId(duplicate.id()));
        }
        Ok(Self { tasks })
    }

    /// Appends a task to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DuplicateTaskId`] when the identifier is
    /// already present.
    pub fn push(&mut self, task: Task) -> Result<(), TaskDomainError> {
        if self.contains(task.id()) {
            return Err(TaskDomainError::DuplicateTaskId(task.id()));
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns the new completion value, or `None` when no such task exists.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .map(Task::toggle)
    }

    /// Removes and returns the task with `id`, if present.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(position))
    }

    /// Returns the task with `id`, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns `true` when a task with `id` exists.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the largest identifier in the collection.
    #[must_use]
    pub fn max_id(&self) -> Option<TaskId> {
        self.tasks.iter().map(Task::id).max()
    }

    /// Returns the smallest positive identifier not used by any task.
    #[must_use]
    pub fn lowest_unused_id(&self) -> Option<TaskId> {
        let used: HashSet<TaskId> = self.tasks.iter().map(Task::id).collect();
        (1..=u64::MAX)
            .map(TaskId::new)
            .find(|candidate| !used.contains(candidate))
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Iterates over the tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the collection holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    /// Returns `completed / total * 100`, or `0.0` for an empty collection.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "progress is a display percentage, not an exact quantity"
    )]
    pub fn progress_percent(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        let completed = u32::try_from(self.completed_count()).unwrap_or(u32::MAX);
        let total = u32::try_from(self.tasks.len()).unwrap_or(u32::MAX);
        f64::from(completed) / f64::from(total) * 100.0
    }

    /// Returns `true` when the collection is non-empty and every task is
    /// completed.
    #[must_use]
    pub fn is_all_complete(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(Task::is_completed)
    }
}

impl TryFrom<Vec<Task>> for TaskCollection {
    type Error = TaskDomainError;

    fn try_from(tasks: Vec<Task>) -> Result<Self, Self::Error> {
        Self::from_tasks(tasks)
    }
}

impl From<TaskCollection> for Vec<Task> {
    fn from(collection: TaskCollection) -> Self {
        collection.tasks
    }
}

impl<'a> IntoIterator for &'a TaskCollection {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
