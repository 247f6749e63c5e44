//! Domain model for the project aggregate.
//!
//! A [`Project`] owns its [`Task`]s and keeps its derived status and hour
//! budget consistent as they change. Everything here is synchronous and free
//! of infrastructure; publication of events leaving the aggregate goes
//! through the [`ProjectEventSink`](crate::project::ports::ProjectEventSink)
//! port.

mod activity;
mod config;
mod error;
mod events;
mod ids;
mod project;
mod status;
mod subscriptions;
mod task;

pub use activity::{ActivityEntry, ActivityLog};
pub use config::{DEFAULT_HOURS_LIMIT, ProjectConfig};
pub use error::{ParseProjectStatusError, ProjectDomainError};
pub use events::{
    ProjectEvent, TaskCompleted, TaskHoursUpdated, TaskListener, TaskSnapshot, UpdateDecision,
};
pub use ids::{ProjectId, TaskId, TaskName};
pub use project::{Project, TaskHandle};
pub use status::ProjectStatus;
pub use task::{Completion, HoursUpdate, Task};
