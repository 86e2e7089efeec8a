//! Error types for task domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyTaskText,

    /// A task with the same identifier is already in the collection.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskId),
}

/// Error returned while parsing a task priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
