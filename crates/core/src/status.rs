//! Task lifecycle status.
//!
//! The status moves along a single forward path:
//! `NOT_STARTED -> STARTED -> FINISHED`. No transition skips a state
//! or goes backward; the `can_*` predicates encode the only two legal
//! edges.

use std::fmt;

/// Task status, stored as TEXT in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    NotStarted,
    Started,
    Finished,
}

impl TaskStatus {
    /// Wire/storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "NOT_STARTED",
            TaskStatus::Started => "STARTED",
            TaskStatus::Finished => "FINISHED",
        }
    }

    /// Parse a stored value. Unrecognized input falls back to
    /// `NotStarted` rather than failing.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "STARTED" => TaskStatus::Started,
            "FINISHED" => TaskStatus::Finished,
            _ => TaskStatus::NotStarted,
        }
    }

    /// Whether the `start` transition is legal from this state.
    pub fn can_start(self) -> bool {
        self == TaskStatus::NotStarted
    }

    /// Whether the `finish` transition is legal from this state.
    pub fn can_finish(self) -> bool {
        self == TaskStatus::Started
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
