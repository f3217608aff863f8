//! Task entity model.

use timekeeper_core::status::TaskStatus;
use timekeeper_core::types::{DbId, Identified, Timestamp};

use crate::models::{Person, Project};

/// A task with its person/project references resolved.
///
/// The row itself stores only ids; the repository assembles the full
/// entity with a join step on read. `contributors` keeps its stored
/// order. `project` is `None` only when the referenced project has
/// been deleted out from under the task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Task {
    pub id: Option<DbId>,
    pub description: String,
    pub start_date: Option<Timestamp>,
    pub finish_date: Option<Timestamp>,
    pub status: TaskStatus,
    pub contributors: Vec<Person>,
    pub project: Option<Project>,
    pub created_at: Option<Timestamp>,
    pub modified_at: Option<Timestamp>,
    pub version: i64,
}

impl Identified for Task {
    fn id(&self) -> Option<DbId> {
        self.id
    }
}
