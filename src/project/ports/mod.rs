//! Port contracts for the project aggregate.
//!
//! Ports define infrastructure-agnostic interfaces the aggregate depends on.

pub mod event_sink;

#[cfg(test)]
pub use event_sink::MockProjectEventSink;
pub use event_sink::ProjectEventSink;
