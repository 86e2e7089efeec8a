//! Tests for state surviving across widget sessions.

use rstest::rstest;
use taskdeck::{
    storage::ports::KeyValueStore,
    task::domain::{Priority, TaskCollection, TaskId},
};

use super::helpers::{Session, empty_list, fresh};

#[rstest]
fn first_session_is_seeded_and_persisted(fresh: Session) -> eyre::Result<()> {
    let widget = fresh.open();

    let raw = fresh
        .backing
        .get("tasks")?
        .ok_or_else(|| eyre::eyre!("seed was not persisted"))?;
    let stored: TaskCollection = serde_json::from_str(&raw)?;

    eyre::ensure!(stored == *widget.tasks().tasks());
    eyre::ensure!(stored.len() == 3);
    eyre::ensure!(stored.completed_count() == 0);
    Ok(())
}

#[rstest]
fn tasks_and_theme_survive_reload(empty_list: Session) -> eyre::Result<()> {
    let mut first = empty_list.open();
    let id = first
        .add_task("Call the bank", Priority::High)
        .ok_or_else(|| eyre::eyre!("add failed"))?;
    first.toggle_task(id);
    first.toggle_theme();

    let second = empty_list.open();

    eyre::ensure!(second.snapshot().tasks == first.snapshot().tasks);
    eyre::ensure!(!second.snapshot().dark_mode);
    Ok(())
}

#[rstest]
fn persisted_format_is_plain_json(empty_list: Session) -> eyre::Result<()> {
    let mut widget = empty_list.open();
    let id = widget
        .add_task("Buy milk", Priority::Low)
        .ok_or_else(|| eyre::eyre!("add failed"))?;

    let raw = empty_list
        .backing
        .get("tasks")?
        .ok_or_else(|| eyre::eyre!("tasks not persisted"))?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;

    eyre::ensure!(
        value
            == serde_json::json!([{
                "id": id.value(),
                "text": "Buy milk",
                "completed": false,
                "priority": "low",
            }])
    );
    eyre::ensure!(empty_list.backing.get("darkMode")?.as_deref() == Some("true"));
    Ok(())
}

#[rstest]
fn deleted_tasks_stay_deleted(fresh: Session) {
    let mut first = fresh.open();
    first.delete_task(TaskId::new(2));

    let second = fresh.open();

    let ids: Vec<u64> = second
        .tasks()
        .tasks()
        .iter()
        .map(|task| task.id().value())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}
