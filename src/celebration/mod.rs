//! "All tasks done" celebration detection.
//!
//! A celebration fires on the transition into a fully completed task list,
//! never merely because the list is fully completed. It resets on its own
//! after a fixed delay, or as soon as the list stops being fully completed.
//!
//! - Domain types in [`domain`]
//! - Detection service in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
