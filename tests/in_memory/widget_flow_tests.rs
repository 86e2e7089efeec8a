//! Command-sequence tests for the widget over in-memory collaborators.

use rstest::rstest;
use taskdeck::task::domain::{Priority, TaskId};

use super::helpers::{Session, empty_list, fresh};
use crate::test_helpers::approx_eq;

fn ids(widget: &super::helpers::MemoryWidget) -> Vec<TaskId> {
    widget.tasks().tasks().iter().map(|task| task.id()).collect()
}

#[rstest]
fn adding_to_an_empty_list(empty_list: Session) {
    let mut widget = empty_list.open();

    let added = widget.add_task("Buy milk", Priority::Low);
    let snapshot = widget.snapshot();

    assert!(added.is_some());
    assert_eq!(snapshot.total(), 1);
    assert_eq!(snapshot.completed_count, 0);
    assert!(approx_eq(snapshot.progress_percent, 0.0));
}

#[rstest]
fn two_task_list_celebrates_after_the_second_toggle(empty_list: Session) -> eyre::Result<()> {
    let mut widget = empty_list.open();
    let first = widget
        .add_task("Stretch", Priority::Low)
        .ok_or_else(|| eyre::eyre!("first add failed"))?;
    let second = widget
        .add_task("Read", Priority::High)
        .ok_or_else(|| eyre::eyre!("second add failed"))?;

    widget.toggle_task(first);
    eyre::ensure!(!widget.snapshot().celebrating);
    eyre::ensure!(approx_eq(widget.snapshot().progress_percent, 50.0));

    widget.toggle_task(second);
    eyre::ensure!(widget.snapshot().celebrating);
    eyre::ensure!(widget.snapshot().effects.len() == 50);
    Ok(())
}

#[rstest]
fn completing_versus_deleting_the_last_open_task(
    fresh: Session,
    #[from(fresh)] other: Session,
) {
    let mut completing = fresh.open();
    completing.toggle_task(TaskId::new(1));
    completing.toggle_task(TaskId::new(2));
    completing.toggle_task(TaskId::new(3));
    assert!(completing.snapshot().celebrating);

    let mut deleting = other.open();
    deleting.toggle_task(TaskId::new(1));
    deleting.toggle_task(TaskId::new(2));
    deleting.delete_task(TaskId::new(3));
    assert!(!deleting.snapshot().celebrating);
    assert_eq!(deleting.snapshot().completed_count, 2);
    assert_eq!(deleting.snapshot().total(), 2);
}

#[rstest]
fn no_refire_when_toggling_a_done_task_during_celebration(fresh: Session) {
    let mut widget = fresh.open();
    for id in 1..=3 {
        widget.toggle_task(TaskId::new(id));
    }
    assert!(widget.snapshot().celebrating);

    widget.toggle_task(TaskId::new(2));
    widget.toggle_task(TaskId::new(2));

    assert!(!widget.snapshot().celebrating);
    assert_eq!(widget.snapshot().completed_count, 3);
}

#[rstest]
fn tasks_keep_insertion_order(empty_list: Session) {
    let mut widget = empty_list.open();
    let added: Vec<TaskId> = ["a", "b", "c"]
        .into_iter()
        .filter_map(|text| widget.add_task(text, Priority::Medium))
        .collect();

    if let Some(middle) = added.get(1) {
        widget.toggle_task(*middle);
    }

    assert_eq!(ids(&widget), added);
}

#[rstest]
fn cue_plays_once_per_completion(fresh: Session) {
    let mut widget = fresh.open();

    widget.toggle_task(TaskId::new(1));
    widget.toggle_task(TaskId::new(1));
    widget.toggle_task(TaskId::new(2));
    widget.toggle_task(TaskId::new(404));

    assert_eq!(fresh.cue.plays(), 2);
}

#[rstest]
fn celebration_ends_after_five_seconds(fresh: Session) {
    let mut widget = fresh.open();
    for id in 1..=3 {
        widget.toggle_task(TaskId::new(id));
    }

    fresh.clock.advance_millis(4_000);
    assert!(widget.snapshot().celebrating);

    fresh.clock.advance_millis(1_000);
    widget.tick();
    assert!(!widget.snapshot().celebrating);
    assert!(widget.snapshot().effects.is_empty());
}
