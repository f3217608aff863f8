//! Person entity model.

use sqlx::FromRow;
use timekeeper_core::types::{DbId, Identified, Timestamp};

/// A person row from the `person` table.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct Person {
    pub id: Option<DbId>,
    pub name: String,
    pub created_at: Option<Timestamp>,
    pub modified_at: Option<Timestamp>,
    pub version: i64,
}

impl Identified for Person {
    fn id(&self) -> Option<DbId> {
        self.id
    }
}
