//! Then steps for project budget BDD scenarios.

use super::world::ProjectWorld;
use planwright::project::domain::ProjectStatus;
use rstest_bdd_macros::then;

#[then(r#"the project status is "{status}""#)]
fn project_status_is(world: &ProjectWorld, status: String) -> Result<(), eyre::Report> {
    let expected = ProjectStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let actual = world.project()?.status();
    if actual != expected {
        return Err(eyre::eyre!("expected status {expected}, found {actual}"));
    }
    Ok(())
}

#[then("the project has {count:usize} tasks")]
fn project_has_tasks(world: &ProjectWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.project()?.tasks().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}

#[then(r#"the activity log contains "{message}""#)]
fn activity_log_contains(world: &ProjectWorld, message: String) -> Result<(), eyre::Report> {
    let project = world.project()?;
    if !project.activity_log().contains(&message) {
        return Err(eyre::eyre!(
            "activity log is missing {message:?}:\n{project}"
        ));
    }
    Ok(())
}

#[then("the last change is rejected")]
fn last_change_rejected(world: &ProjectWorld) -> Result<(), eyre::Report> {
    if world.last_error.is_none() {
        return Err(eyre::eyre!("expected the last change to be rejected"));
    }
    Ok(())
}

#[then(r#"the task "{name}" has {hours:u32} hours remaining"#)]
fn task_has_hours(world: &ProjectWorld, name: String, hours: u32) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&name)?;
    let actual = world
        .project()?
        .task(task_id)
        .map(|task| task.hours_remaining())
        .ok_or_else(|| eyre::eyre!("no task named {name}"))?;
    if actual != hours {
        return Err(eyre::eyre!("expected {hours} hours for {name}, found {actual}"));
    }
    Ok(())
}

#[then("{count:usize} task deleted event is published")]
fn task_deleted_events_published(world: &ProjectWorld, count: usize) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let published = world
        .sink
        .events_for(project_id)
        .iter()
        .filter(|event| event.event_type() == "TaskDeleted")
        .count();
    if published != count {
        return Err(eyre::eyre!(
            "expected {count} TaskDeleted events, found {published}"
        ));
    }
    Ok(())
}
