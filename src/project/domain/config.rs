//! Per-project configuration.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Hour budget applied when no configuration is supplied.
pub const DEFAULT_HOURS_LIMIT: NonZeroU32 = NonZeroU32::MIN.saturating_add(9);

/// Configuration for a project aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Maximum total remaining hours across all tasks.
    pub hours_limit: NonZeroU32,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            hours_limit: DEFAULT_HOURS_LIMIT,
        }
    }
}

impl ProjectConfig {
    /// Creates a configuration with the given hour budget.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidHoursLimit`] when the budget is
    /// zero.
    pub const fn new(hours_limit: u32) -> Result<Self, ProjectDomainError> {
        match NonZeroU32::new(hours_limit) {
            Some(limit) => Ok(Self { hours_limit: limit }),
            None => Err(ProjectDomainError::InvalidHoursLimit),
        }
    }

    /// Returns the hour budget as a plain integer.
    #[must_use]
    pub const fn hours_limit(self) -> u32 {
        self.hours_limit.get()
    }
}
