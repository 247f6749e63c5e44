//! Given steps for project budget BDD scenarios.

use super::world::ProjectWorld;
use eyre::WrapErr;
use planwright::project::domain::{Project, ProjectConfig};
use rstest_bdd_macros::given;

#[given("a project with an hours limit of {limit:u32}")]
fn project_with_limit(world: &mut ProjectWorld, limit: u32) -> Result<(), eyre::Report> {
    let config = ProjectConfig::new(limit).wrap_err("configure project hours limit")?;
    world.project = Some(Project::with_config(
        "Scenario project",
        config,
        world.shared_sink(),
    ));
    Ok(())
}
