//! Task notifications and externally published project events.
//!
//! Notifications ([`TaskCompleted`], [`TaskHoursUpdated`]) flow from a task
//! to the project that owns it and never leave the aggregate. The owner
//! answers an hours update with an [`UpdateDecision`], which the task applies
//! before the mutating call returns. [`ProjectEvent`] values are the only
//! events handed to the external sink.

use super::{ProjectDomainError, ProjectId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of a task's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// Task identifier.
    pub id: TaskId,
    /// Identifier of the owning project.
    pub project_id: ProjectId,
    /// Task display name.
    pub name: String,
    /// Remaining hours at snapshot time.
    pub hours_remaining: u32,
    /// Completion flag at snapshot time.
    pub is_complete: bool,
}

/// Raised when a task transitions to complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCompleted {
    /// State of the task after completion.
    pub task: TaskSnapshot,
}

/// Raised when a task's remaining hours change to a non-zero value.
///
/// `task` holds the tentative state; it becomes permanent only if the
/// listener accepts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskHoursUpdated {
    /// Tentative state of the task.
    pub task: TaskSnapshot,
    /// Remaining hours before the update.
    pub previous_hours: u32,
}

/// Answer returned by a listener for a tentative hours update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateDecision {
    /// Keep the new value.
    Accept,
    /// Roll the task back to its previous value.
    Reject(ProjectDomainError),
}

/// Receives task notifications synchronously.
pub trait TaskListener {
    /// Called after a task has been marked complete.
    fn task_completed(&mut self, event: &TaskCompleted);

    /// Called with the tentative state of an hours update.
    fn hours_updated(&mut self, event: &TaskHoursUpdated) -> UpdateDecision;
}

/// Event published by a project to its external sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProjectEvent {
    /// A task was removed from its project.
    TaskDeleted {
        /// Final state of the removed task.
        task: TaskSnapshot,
        /// When the task was removed.
        occurred_at: DateTime<Utc>,
    },
}

impl ProjectEvent {
    /// Returns the event type name.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::TaskDeleted { .. } => "TaskDeleted",
        }
    }

    /// Returns the project the event belongs to.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        match self {
            Self::TaskDeleted { task, .. } => task.project_id,
        }
    }

    /// Returns when the event occurred.
    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::TaskDeleted { occurred_at, .. } => *occurred_at,
        }
    }

    /// Returns the event payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the payload cannot be serialised.
    pub fn payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Self::TaskDeleted { task, .. } => serde_json::to_value(task),
        }
    }
}
