//! When steps for celebration BDD scenarios.

use super::world::CelebrationWorld;
use rstest_bdd_macros::when;
use taskdeck::task::domain::{Priority, TaskId};

#[when("the open task is completed")]
fn complete_open_task(world: &mut CelebrationWorld) -> Result<(), eyre::Report> {
    let id = world.open_task()?;
    let completed = world.widget_mut()?.toggle_task(id);
    if completed != Some(true) {
        return Err(eyre::eyre!("expected task {id} to become completed"));
    }
    Ok(())
}

#[when("the open task is deleted")]
fn delete_open_task(world: &mut CelebrationWorld) -> Result<(), eyre::Report> {
    let id = world.open_task()?;
    world
        .widget_mut()?
        .delete_task(id)
        .map(|_| ())
        .ok_or_else(|| eyre::eyre!("task {id} was not deleted"))
}

#[when("a new task is added")]
fn add_new_task(world: &mut CelebrationWorld) -> Result<(), eyre::Report> {
    world.clock.advance_millis(1_000);
    let id = world
        .widget_mut()?
        .add_task("One more thing", Priority::Medium)
        .ok_or_else(|| eyre::eyre!("new task was not added"))?;
    world.open_task = Some(id);
    Ok(())
}

#[when("task {id:u64} is toggled twice")]
fn toggle_twice(world: &mut CelebrationWorld, id: u64) -> Result<(), eyre::Report> {
    let widget = world.widget_mut()?;
    widget.toggle_task(TaskId::new(id));
    widget.toggle_task(TaskId::new(id));
    Ok(())
}

#[when("{millis:i64} milliseconds pass")]
fn time_passes(world: &mut CelebrationWorld, millis: i64) -> Result<(), eyre::Report> {
    world.clock.advance_millis(millis);
    world.widget_mut()?.tick();
    Ok(())
}
