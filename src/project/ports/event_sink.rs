//! Sink port for events published by a project aggregate.

use crate::project::domain::ProjectEvent;

/// Receives events that leave the project aggregate.
///
/// Publication is fire-and-forget: the aggregate does not observe delivery
/// failures, and implementations must not call back into the project.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectEventSink: Send + Sync {
    /// Publishes an event synchronously.
    fn publish(&self, event: &ProjectEvent);
}
