//! Given steps for celebration BDD scenarios.

use super::world::CelebrationWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::json;
use taskdeck::{storage::ports::KeyValueStore, task::domain::TaskId};

#[given("a task list with {done:u64} completed and {open:u64} open tasks")]
fn task_list_with(world: &mut CelebrationWorld, done: u64, open: u64) -> Result<(), eyre::Report> {
    let tasks: Vec<serde_json::Value> = (1..=done + open)
        .map(|id| {
            let completed = id <= done;
            json!({
                "id": id,
                "text": format!("task {id}"),
                "completed": completed,
                "priority": "medium",
            })
        })
        .collect();
    world
        .backing
        .set("tasks", &serde_json::to_string(&tasks)?)
        .wrap_err("store scenario tasks")?;
    if open > 0 {
        world.open_task = Some(TaskId::new(done + open));
    }
    world.open_widget();
    Ok(())
}

#[given("the open task has already been completed")]
fn open_task_already_completed(world: &mut CelebrationWorld) -> Result<(), eyre::Report> {
    let id = world.open_task()?;
    let widget = world.widget_mut()?;
    widget.toggle_task(id);
    if !widget.snapshot().celebrating {
        return Err(eyre::eyre!("expected the scenario setup to celebrate"));
    }
    Ok(())
}

#[given("nothing has been stored")]
fn nothing_stored(world: &mut CelebrationWorld) {
    world.open_widget();
}
