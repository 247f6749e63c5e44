//! Event sink that writes published events to `tracing`.

use crate::project::{domain::ProjectEvent, ports::ProjectEventSink};

/// Emits each published event as an `info` level tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEventSink;

impl LoggingEventSink {
    /// Creates a logging sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProjectEventSink for LoggingEventSink {
    fn publish(&self, event: &ProjectEvent) {
        match event.payload() {
            Ok(payload) => tracing::info!(
                event_type = event.event_type(),
                project_id = %event.project_id(),
                occurred_at = %event.occurred_at(),
                %payload,
                "project event published"
            ),
            Err(err) => tracing::warn!(
                event_type = event.event_type(),
                project_id = %event.project_id(),
                %err,
                "failed to serialise project event payload"
            ),
        }
    }
}
