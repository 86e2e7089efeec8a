//! Composition root for the task list widget.
//!
//! [`TaskWidget`] wires the task store, celebration detector and preference
//! store together: every task command is followed by a celebration
//! evaluation, and the presentation layer reads everything it needs from a
//! [`WidgetSnapshot`].

mod snapshot;
mod task_widget;

pub use snapshot::WidgetSnapshot;
pub use task_widget::{TaskWidget, WidgetPorts};
