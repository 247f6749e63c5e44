//! Append-only activity log kept by a project.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single human-readable activity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Message describing what happened.
    pub message: String,
    /// When the entry was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Ordered record of side effects applied to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a message stamped with the current clock time.
    pub fn record(&mut self, message: impl Into<String>, clock: &impl Clock) {
        self.entries.push(ActivityEntry {
            message: message.into(),
            recorded_at: clock.utc(),
        });
    }

    /// Returns all entries in recording order.
    #[must_use]
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    /// Iterates over the recorded messages in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.message.as_str())
    }

    /// Returns `true` when any entry has exactly the given message.
    #[must_use]
    pub fn contains(&self, message: &str) -> bool {
        self.messages().any(|recorded| recorded == message)
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
