//! Registry of tasks whose notifications a project listens to.

use super::TaskId;
use std::collections::HashSet;

/// Tasks currently wired to their owning project's handlers.
#[derive(Debug, Clone, Default)]
pub(crate) struct Subscriptions {
    tasks: HashSet<TaskId>,
}

impl Subscriptions {
    pub(crate) fn subscribe(&mut self, task_id: TaskId) {
        self.tasks.insert(task_id);
    }

    pub(crate) fn unsubscribe(&mut self, task_id: TaskId) {
        self.tasks.remove(&task_id);
    }

    pub(crate) fn is_subscribed(&self, task_id: TaskId) -> bool {
        self.tasks.contains(&task_id)
    }
}
