//! Project entity model.

use sqlx::FromRow;
use timekeeper_core::types::{DbId, Identified, Timestamp};

/// A project row from the `project` table.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct Project {
    pub id: Option<DbId>,
    pub name: String,
    pub created_at: Option<Timestamp>,
    pub modified_at: Option<Timestamp>,
    pub version: i64,
}

impl Identified for Project {
    fn id(&self) -> Option<DbId> {
        self.id
    }
}
