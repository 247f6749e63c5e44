//! Task entity owned by a project aggregate.

use super::{
    ProjectDomainError, ProjectId, TaskCompleted, TaskHoursUpdated, TaskId, TaskListener,
    TaskName, TaskSnapshot, UpdateDecision,
};
use serde::Serialize;

/// Outcome of marking a task complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The task moved to complete and its owner was notified.
    Completed,
    /// The task was already complete; nothing changed.
    AlreadyComplete,
}

/// Outcome of a successful remaining-hours update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoursUpdate {
    /// The new non-zero estimate was accepted.
    Applied {
        /// Remaining hours before the update.
        previous: u32,
        /// Remaining hours after the update.
        current: u32,
    },
    /// The estimate dropped to zero, completing the task.
    Completed(Completion),
}

/// A unit of work tracked by a project.
///
/// Tasks are created by [`Project::add_task`](super::Project::add_task) and
/// mutated through a [`TaskHandle`](super::TaskHandle), so that every change
/// is observed by the owning project.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    name: TaskName,
    hours_remaining: u32,
    is_complete: bool,
}

impl Task {
    /// Creates a task bound to a project. A zero estimate starts complete.
    pub(crate) fn new(name: TaskName, hours_remaining: u32, project_id: ProjectId) -> Self {
        Self {
            id: TaskId::new(),
            project_id,
            name,
            hours_remaining,
            is_complete: hours_remaining == 0,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the identifier of the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the remaining hours.
    #[must_use]
    pub const fn hours_remaining(&self) -> u32 {
        self.hours_remaining
    }

    /// Returns whether the task is complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Captures the current observable state.
    #[must_use]
    pub fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot {
            id: self.id,
            project_id: self.project_id,
            name: self.name.as_str().to_owned(),
            hours_remaining: self.hours_remaining,
            is_complete: self.is_complete,
        }
    }

    /// Marks the task complete, zeroing its remaining hours.
    ///
    /// Completion cannot be vetoed. The listener is only notified on the
    /// transition, so repeated calls are no-ops.
    pub(crate) fn mark_complete(&mut self, listener: &mut impl TaskListener) -> Completion {
        if self.is_complete {
            return Completion::AlreadyComplete;
        }
        self.is_complete = true;
        self.hours_remaining = 0;
        listener.task_completed(&TaskCompleted {
            task: self.snapshot(),
        });
        Completion::Completed
    }

    /// Re-estimates the remaining hours.
    ///
    /// A zero estimate completes the task. Any other estimate is applied
    /// tentatively and offered to the listener, which may reject it; a
    /// rejected estimate is rolled back before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NegativeHours`] without notifying the
    /// listener when `hours` is negative, or the listener's rejection reason
    /// after rolling back.
    pub(crate) fn update_hours_remaining(
        &mut self,
        hours: i32,
        listener: &mut impl TaskListener,
    ) -> Result<HoursUpdate, ProjectDomainError> {
        let new_hours =
            u32::try_from(hours).map_err(|_| ProjectDomainError::NegativeHours(hours))?;
        let previous = self.hours_remaining;

        self.hours_remaining = new_hours;
        if new_hours == 0 {
            return Ok(HoursUpdate::Completed(self.mark_complete(listener)));
        }
        self.is_complete = false;

        let event = TaskHoursUpdated {
            task: self.snapshot(),
            previous_hours: previous,
        };
        match listener.hours_updated(&event) {
            UpdateDecision::Accept => Ok(HoursUpdate::Applied {
                previous,
                current: new_hours,
            }),
            UpdateDecision::Reject(reason) => {
                self.hours_remaining = previous;
                self.is_complete = previous == 0;
                Err(reason)
            }
        }
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Task {}
