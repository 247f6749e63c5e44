//! In-memory event sink for tests and inspection.

use std::sync::{Arc, PoisonError, RwLock};

use crate::project::{
    domain::{ProjectEvent, ProjectId},
    ports::ProjectEventSink,
};

/// Thread-safe sink that keeps every published event in order.
///
/// Clones share the same storage, so a clone can be handed to a project
/// while the original is kept for assertions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventSink {
    events: Arc<RwLock<Vec<ProjectEvent>>>,
}

impl InMemoryEventSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all events published so far.
    #[must_use]
    pub fn events(&self) -> Vec<ProjectEvent> {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the events published by one project.
    #[must_use]
    pub fn events_for(&self, project_id: ProjectId) -> Vec<ProjectEvent> {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|event| event.project_id() == project_id)
            .cloned()
            .collect()
    }

    /// Returns the number of events published so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` when nothing has been published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProjectEventSink for InMemoryEventSink {
    fn publish(&self, event: &ProjectEvent) {
        self.events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
