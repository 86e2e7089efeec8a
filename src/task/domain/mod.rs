//! Domain model for the task list.
//!
//! Tasks are plain values; the collection owns ordering, identity
//! uniqueness and the derived progress figures. Persistence and side effects
//! stay outside the domain boundary.

mod collection;
mod error;
mod ids;
mod task;

pub use collection::TaskCollection;
pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::{TaskId, TaskText};
pub use task::{Priority, Task};
