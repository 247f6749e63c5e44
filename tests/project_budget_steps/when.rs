//! When steps for project budget BDD scenarios.

use super::world::ProjectWorld;
use mockable::DefaultClock;
use rstest_bdd_macros::when;

#[when(r#"a task "{name}" with {hours:i32} hours is added"#)]
fn add_task(world: &mut ProjectWorld, name: String, hours: i32) -> Result<(), eyre::Report> {
    let clock = DefaultClock;
    let result = world.project_mut()?.add_task(name, hours, &clock);
    world.record(result);
    Ok(())
}

#[when(r#"the task "{name}" is marked complete"#)]
fn mark_complete(world: &mut ProjectWorld, name: String) -> Result<(), eyre::Report> {
    let clock = DefaultClock;
    let task_id = world.task_id(&name)?;
    let result = world
        .project_mut()?
        .task_mut(task_id)
        .ok_or_else(|| eyre::eyre!("no handle for task {name}"))?
        .mark_complete(&clock);
    world.record(result);
    Ok(())
}

#[when(r#"the task "{name}" is re-estimated to {hours:i32} hours"#)]
fn re_estimate(world: &mut ProjectWorld, name: String, hours: i32) -> Result<(), eyre::Report> {
    let clock = DefaultClock;
    let task_id = world.task_id(&name)?;
    let result = world
        .project_mut()?
        .task_mut(task_id)
        .ok_or_else(|| eyre::eyre!("no handle for task {name}"))?
        .update_hours_remaining(hours, &clock);
    world.record(result);
    Ok(())
}

#[when(r#"the task "{name}" is deleted"#)]
fn delete_task(world: &mut ProjectWorld, name: String) -> Result<(), eyre::Report> {
    let clock = DefaultClock;
    let task_id = world.task_id(&name)?;
    let result = world.project_mut()?.delete_task(task_id, &clock);
    world.record(result);
    Ok(())
}
