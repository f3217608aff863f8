//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument. The shared
//! [`Repository`] trait carries the save/find/delete contract the
//! generic CRUD handlers are written against.
//!
//! `save` implements insert-or-update keyed on [`Identified::is_new`]:
//! an insert lets the database assign id, timestamps, and version 1;
//! an update is a conditional write keyed on the expected version,
//! bumping `version` and refreshing `modified_at` in SQL. A save
//! carrying a stale version is rejected with
//! [`DbError::StaleVersion`](crate::DbError::StaleVersion).

pub mod person_repo;
pub mod project_repo;
pub mod task_repo;

pub use person_repo::PersonRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;

use async_trait::async_trait;
use sqlx::PgPool;
use timekeeper_core::types::DbId;

use crate::DbError;

/// Persistence contract shared by all entity repositories.
#[async_trait]
pub trait Repository: Send + Sync {
    type Entity: Send + Sync;

    /// Insert the entity if it is new, otherwise apply a
    /// version-checked update. Returns the persisted state, including
    /// server-assigned fields.
    async fn save(pool: &PgPool, entity: Self::Entity) -> Result<Self::Entity, DbError>;

    /// Fetch one entity by id.
    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Self::Entity>, DbError>;

    /// Fetch all entities in insertion-like order.
    async fn find_all(pool: &PgPool) -> Result<Vec<Self::Entity>, DbError>;

    /// Delete by id. Returns `true` if a row was removed.
    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError>;
}
