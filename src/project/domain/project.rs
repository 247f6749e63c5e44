//! Project aggregate root.
//!
//! A project owns an ordered list of tasks and keeps two pieces of derived
//! state consistent with them: its [`ProjectStatus`] and the hour budget from
//! its [`ProjectConfig`]. Tasks are only mutable through a [`TaskHandle`],
//! which delivers each task notification to the project before the mutating
//! call returns, giving the project the chance to veto a re-estimate.

use super::{
    ActivityLog, Completion, HoursUpdate, ProjectConfig, ProjectDomainError, ProjectEvent,
    ProjectId, ProjectStatus, Task, TaskCompleted, TaskHoursUpdated, TaskId, TaskListener,
    TaskName, TaskSnapshot, UpdateDecision, subscriptions::Subscriptions,
};
use crate::project::ports::ProjectEventSink;
use mockable::Clock;
use std::fmt;
use std::iter;
use std::sync::Arc;

/// Aggregate root coordinating a set of tasks under an hour budget.
pub struct Project {
    id: ProjectId,
    name: String,
    status: ProjectStatus,
    tasks: Vec<Task>,
    subscriptions: Subscriptions,
    activity: ActivityLog,
    config: ProjectConfig,
    sink: Arc<dyn ProjectEventSink>,
}

impl Project {
    /// Creates an empty project with the default configuration.
    #[must_use]
    pub fn new(name: impl Into<String>, sink: Arc<dyn ProjectEventSink>) -> Self {
        Self::with_config(name, ProjectConfig::default(), sink)
    }

    /// Creates an empty project with an explicit configuration.
    #[must_use]
    pub fn with_config(
        name: impl Into<String>,
        config: ProjectConfig,
        sink: Arc<dyn ProjectEventSink>,
    ) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            status: ProjectStatus::New,
            tasks: Vec::new(),
            subscriptions: Subscriptions::default(),
            activity: ActivityLog::new(),
            config,
            sink,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the project name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the derived project status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given identifier, if it belongs here.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns a handle for mutating one of this project's tasks.
    #[must_use]
    pub fn task_mut(&mut self, id: TaskId) -> Option<TaskHandle<'_>> {
        self.task(id)?;
        Some(TaskHandle {
            project: self,
            task_id: id,
        })
    }

    /// Returns the activity log.
    #[must_use]
    pub const fn activity_log(&self) -> &ActivityLog {
        &self.activity
    }

    /// Returns the hour budget.
    #[must_use]
    pub const fn hours_limit(&self) -> u32 {
        self.config.hours_limit()
    }

    /// Returns the sum of remaining hours across all tasks.
    #[must_use]
    pub fn total_hours_remaining(&self) -> u64 {
        sum_hours(&self.tasks)
    }

    /// Adds a new task to the project.
    ///
    /// The task is observed by the project from its first mutation onward.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NegativeHours`],
    /// [`ProjectDomainError::EmptyTaskName`] or
    /// [`ProjectDomainError::HoursLimitExceeded`]. Each rejection is also
    /// recorded in the activity log and leaves the task list unchanged.
    pub fn add_task(
        &mut self,
        name: impl Into<String>,
        hours_remaining: i32,
        clock: &impl Clock,
    ) -> Result<TaskId, ProjectDomainError> {
        let Ok(hours) = u32::try_from(hours_remaining) else {
            return Err(self.reject(ProjectDomainError::NegativeHours(hours_remaining), clock));
        };
        let task_name = match TaskName::new(name) {
            Ok(valid) => valid,
            Err(err) => return Err(self.reject(err, clock)),
        };
        if !self.verify_hours_within_limit(u64::from(hours)) {
            let exceeded = ProjectDomainError::HoursLimitExceeded {
                requested: self.total_hours_remaining() + u64::from(hours),
                limit: self.hours_limit(),
            };
            return Err(self.reject(exceeded, clock));
        }

        let task = Task::new(task_name, hours, self.id);
        let task_id = task.id();
        let message = format!("{} added.", task.name());
        self.tasks.push(task);
        self.subscriptions.subscribe(task_id);
        self.update_status();
        self.activity.record(message, clock);
        tracing::debug!(project_id = %self.id, %task_id, hours, "task added");
        Ok(task_id)
    }

    /// Removes a task and publishes a `TaskDeleted` event.
    ///
    /// Removal never increases the total hours, so the budget is not
    /// re-checked. The derived status is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskNotFound`] without logging when no
    /// such task belongs to the project.
    pub fn delete_task(
        &mut self,
        id: TaskId,
        clock: &impl Clock,
    ) -> Result<TaskSnapshot, ProjectDomainError> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(ProjectDomainError::TaskNotFound(id))?;
        let task = self.tasks.remove(position);
        self.subscriptions.unsubscribe(id);

        let snapshot = task.snapshot();
        self.sink.publish(&ProjectEvent::TaskDeleted {
            task: snapshot.clone(),
            occurred_at: clock.utc(),
        });
        self.activity.record(format!("{} deleted.", task.name()), clock);
        tracing::debug!(project_id = %self.id, task_id = %id, "task deleted");
        Ok(snapshot)
    }

    fn verify_hours_within_limit(&self, extra: u64) -> bool {
        self.total_hours_remaining() + extra <= u64::from(self.hours_limit())
    }

    fn update_status(&mut self) {
        self.status = ProjectStatus::derive(self.tasks.iter().map(Task::is_complete));
    }

    fn reject(&mut self, reason: ProjectDomainError, clock: &impl Clock) -> ProjectDomainError {
        tracing::warn!(project_id = %self.id, %reason, "project change rejected");
        self.activity.record(reason.to_string(), clock);
        reason
    }

    /// Runs `f` against one task with a listener wired to this project.
    fn with_task<C, R>(
        &mut self,
        id: TaskId,
        clock: &C,
        f: impl FnOnce(&mut Task, &mut OwnerListener<'_, C>) -> R,
    ) -> Result<R, ProjectDomainError>
    where
        C: Clock,
    {
        let Self {
            id: project_id,
            tasks,
            subscriptions,
            status,
            activity,
            config,
            ..
        } = self;
        let position = tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(ProjectDomainError::TaskNotFound(id))?;
        let (before, rest) = tasks.split_at_mut(position);
        let (task, after) = rest
            .split_first_mut()
            .ok_or(ProjectDomainError::TaskNotFound(id))?;

        let mut listener = OwnerListener {
            project_id: *project_id,
            hours_limit: config.hours_limit(),
            subscriptions,
            status,
            activity,
            siblings: (&*before, &*after),
            clock,
        };
        Ok(f(task, &mut listener))
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Project {}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("status", &self.status)
            .field("tasks", &self.tasks)
            .field("activity", &self.activity)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project: {} ({})", self.name, self.id)?;
        writeln!(
            f,
            "Status: {} {} hours",
            self.status,
            self.total_hours_remaining()
        )?;
        writeln!(f, "Tasks:")?;
        writeln!(f, "--------------")?;
        for task in &self.tasks {
            writeln!(
                f,
                "Task: {} {} hours; Complete? {}",
                task.name(),
                task.hours_remaining(),
                task.is_complete()
            )?;
        }
        writeln!(f, "Activity Log:")?;
        writeln!(f, "--------------")?;
        for message in self.activity.messages() {
            writeln!(f, "{message}")?;
        }
        Ok(())
    }
}

/// Exclusive access to one task of a project.
///
/// Every mutation made through the handle is checked and reflected by the
/// owning project before the call returns.
#[derive(Debug)]
pub struct TaskHandle<'a> {
    project: &'a mut Project,
    task_id: TaskId,
}

impl TaskHandle<'_> {
    /// Returns the identifier of the task.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the current state of the task.
    #[must_use]
    pub fn task(&self) -> Option<&Task> {
        self.project.task(self.task_id)
    }

    /// Marks the task complete.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskNotFound`] if the task has left the
    /// project.
    pub fn mark_complete(&mut self, clock: &impl Clock) -> Result<Completion, ProjectDomainError> {
        self.project.with_task(self.task_id, clock, |task, listener| {
            task.mark_complete(listener)
        })
    }

    /// Re-estimates the task's remaining hours.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NegativeHours`] for a negative estimate
    /// (not logged), [`ProjectDomainError::UpdateExceedsHoursLimit`] when the
    /// project vetoed the change and the task was rolled back, or
    /// [`ProjectDomainError::TaskNotFound`] if the task has left the project.
    pub fn update_hours_remaining(
        &mut self,
        hours: i32,
        clock: &impl Clock,
    ) -> Result<HoursUpdate, ProjectDomainError> {
        let outcome = self.project.with_task(self.task_id, clock, |task, listener| {
            task.update_hours_remaining(hours, listener)
        })?;
        if let Err(ProjectDomainError::NegativeHours(value)) = outcome {
            tracing::debug!(task_id = %self.task_id, hours = value, "ignored negative estimate");
        }
        outcome
    }
}

/// Project-side handlers for the notifications of one task.
struct OwnerListener<'a, C> {
    project_id: ProjectId,
    hours_limit: u32,
    subscriptions: &'a Subscriptions,
    status: &'a mut ProjectStatus,
    activity: &'a mut ActivityLog,
    siblings: (&'a [Task], &'a [Task]),
    clock: &'a C,
}

impl<C> OwnerListener<'_, C> {
    /// Safety net against notifications from tasks this project does not
    /// own. A listener is only built for a task found in the project's own
    /// list, so this holds for every notification routed by a handle.
    fn observes(&self, task: &TaskSnapshot) -> bool {
        task.project_id == self.project_id && self.subscriptions.is_subscribed(task.id)
    }

    fn sibling_tasks(&self) -> impl Iterator<Item = &Task> {
        self.siblings.0.iter().chain(self.siblings.1)
    }

    fn derive_status(&self, changed: &TaskSnapshot) -> ProjectStatus {
        ProjectStatus::derive(
            self.sibling_tasks()
                .map(Task::is_complete)
                .chain(iter::once(changed.is_complete)),
        )
    }
}

impl<C: Clock> TaskListener for OwnerListener<'_, C> {
    fn task_completed(&mut self, event: &TaskCompleted) {
        if !self.observes(&event.task) {
            return;
        }
        let status = self.derive_status(&event.task);
        *self.status = status;
        self.activity
            .record(format!("{} completed.", event.task.name), self.clock);
        tracing::debug!(
            project_id = %self.project_id,
            task_id = %event.task.id,
            %status,
            "task completed"
        );
    }

    fn hours_updated(&mut self, event: &TaskHoursUpdated) -> UpdateDecision {
        if !self.observes(&event.task) {
            return UpdateDecision::Accept;
        }
        let requested = sum_hours(self.sibling_tasks()) + u64::from(event.task.hours_remaining);
        if requested > u64::from(self.hours_limit) {
            let reason = ProjectDomainError::UpdateExceedsHoursLimit {
                task_id: event.task.id,
                requested,
            };
            tracing::warn!(
                project_id = %self.project_id,
                task_id = %event.task.id,
                requested,
                limit = self.hours_limit,
                "hours update rejected"
            );
            self.activity.record(reason.to_string(), self.clock);
            return UpdateDecision::Reject(reason);
        }
        let status = self.derive_status(&event.task);
        *self.status = status;
        tracing::debug!(
            project_id = %self.project_id,
            task_id = %event.task.id,
            previous = event.previous_hours,
            current = event.task.hours_remaining,
            "task re-estimated"
        );
        UpdateDecision::Accept
    }
}

fn sum_hours<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> u64 {
    tasks
        .into_iter()
        .map(|task| u64::from(task.hours_remaining()))
        .sum()
}
