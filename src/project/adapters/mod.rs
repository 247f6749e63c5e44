//! Adapter implementations for project ports.

pub mod logging;
pub mod memory;

pub use logging::LoggingEventSink;
pub use memory::InMemoryEventSink;
