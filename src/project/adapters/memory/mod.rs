//! In-memory adapters for project ports.

mod event_sink;

pub use event_sink::InMemoryEventSink;
