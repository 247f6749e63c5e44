//! Shared world state for project budget BDD scenarios.

use std::sync::Arc;

use planwright::project::{
    adapters::InMemoryEventSink,
    domain::{Project, ProjectDomainError, TaskId},
};
use rstest::fixture;

/// Scenario world for project budget behaviour tests.
pub struct ProjectWorld {
    pub sink: InMemoryEventSink,
    pub project: Option<Project>,
    pub last_error: Option<ProjectDomainError>,
}

impl ProjectWorld {
    /// Creates a world with no project yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sink: InMemoryEventSink::new(),
            project: None,
            last_error: None,
        }
    }

    /// Returns the project under test.
    pub fn project(&self) -> Result<&Project, eyre::Report> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Returns the project under test mutably.
    pub fn project_mut(&mut self) -> Result<&mut Project, eyre::Report> {
        self.project
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Finds a task of the project by name.
    pub fn task_id(&self, name: &str) -> Result<TaskId, eyre::Report> {
        self.project()?
            .tasks()
            .iter()
            .find(|task| task.name().as_str() == name)
            .map(|task| task.id())
            .ok_or_else(|| eyre::eyre!("no task named {name}"))
    }

    /// Records the outcome of the latest change.
    pub fn record<T>(&mut self, result: Result<T, ProjectDomainError>) {
        self.last_error = result.err();
    }

    /// Shares the scenario sink with a project.
    pub fn shared_sink(&self) -> Arc<InMemoryEventSink> {
        Arc::new(self.sink.clone())
    }
}

impl Default for ProjectWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectWorld {
    ProjectWorld::default()
}
