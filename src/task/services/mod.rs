//! Application services for the task list.

mod store;

pub use store::TaskStore;
