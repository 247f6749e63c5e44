//! Derived project status.

use super::ParseProjectStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a project, derived entirely from the completion of its tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// The project has no tasks.
    #[default]
    New,
    /// No task has been completed.
    NotStarted,
    /// Some, but not all, tasks are complete.
    MakingProgress,
    /// Every task is complete.
    Done,
}

impl ProjectStatus {
    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::NotStarted => "Not Started",
            Self::MakingProgress => "Making Progress",
            Self::Done => "Done!",
        }
    }

    /// Derives the status from the completion flag of every task.
    ///
    /// The rules are applied in order with later matches winning: any
    /// complete task means progress, all complete means done, and none
    /// complete means not started. A project whose only task is complete is
    /// therefore [`ProjectStatus::Done`].
    #[must_use]
    pub fn derive(completion: impl IntoIterator<Item = bool>) -> Self {
        let (total, complete) = completion
            .into_iter()
            .fold((0_usize, 0_usize), |(total, complete), is_complete| {
                (total + 1, complete + usize::from(is_complete))
            });

        if total == 0 {
            return Self::New;
        }
        if complete == 0 {
            Self::NotStarted
        } else if complete == total {
            Self::Done
        } else {
            Self::MakingProgress
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "New" => Ok(Self::New),
            "Not Started" => Ok(Self::NotStarted),
            "Making Progress" => Ok(Self::MakingProgress),
            "Done!" => Ok(Self::Done),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}
