//! Error types for project domain validation and consistency checks.
//!
//! Rejection variants render as the activity-log line recorded for them, so
//! callers see the same text whether they inspect the result or the log.

use super::TaskId;
use thiserror::Error;

/// Errors returned by project and task operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The requested remaining hours are negative.
    #[error("Can't add a task with negative hours remaining.")]
    NegativeHours(i32),

    /// Adding the task would push the project over its hour budget.
    #[error("Can't add a task that will exceed project hours limit.")]
    HoursLimitExceeded {
        /// Total hours the project would carry after the addition.
        requested: u64,
        /// Configured project hour budget.
        limit: u32,
    },

    /// Re-estimating a task would push the project over its hour budget.
    #[error("Update would exceed project hour limit.")]
    UpdateExceedsHoursLimit {
        /// Task whose update was rolled back.
        task_id: TaskId,
        /// Total hours the project would have carried.
        requested: u64,
    },

    /// The task name is empty after trimming.
    #[error("Can't add a task without a name.")]
    EmptyTaskName,

    /// No task with the identifier belongs to the project.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The configured hour budget is zero.
    #[error("project hours limit must be a positive number of hours")]
    InvalidHoursLimit,
}

/// Error returned while parsing project status labels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
