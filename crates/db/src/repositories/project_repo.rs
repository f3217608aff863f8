//! Repository for the `project` table.

use async_trait::async_trait;
use sqlx::PgPool;
use timekeeper_core::types::{DbId, Identified};

use crate::models::Project;
use crate::repositories::person_repo::stale_or_missing;
use crate::repositories::Repository;
use crate::DbError;

const COLUMNS: &str = "id, name, created_at, modified_at, version";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

#[async_trait]
impl Repository for ProjectRepo {
    type Entity = Project;

    async fn save(pool: &PgPool, entity: Project) -> Result<Project, DbError> {
        match entity.id() {
            None => {
                let query =
                    format!("INSERT INTO project (name) VALUES ($1) RETURNING {COLUMNS}");
                let saved = sqlx::query_as::<_, Project>(&query)
                    .bind(&entity.name)
                    .fetch_one(pool)
                    .await?;
                Ok(saved)
            }
            Some(id) => {
                let query = format!(
                    "UPDATE project SET name = $2, modified_at = NOW(), version = version + 1
                     WHERE id = $1 AND version = $3
                     RETURNING {COLUMNS}"
                );
                let updated = sqlx::query_as::<_, Project>(&query)
                    .bind(id)
                    .bind(&entity.name)
                    .bind(entity.version)
                    .fetch_optional(pool)
                    .await?;
                match updated {
                    Some(project) => Ok(project),
                    None => {
                        Err(stale_or_missing(pool, "project", "Project", id, entity.version)
                            .await?)
                    }
                }
            }
        }
    }

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM project WHERE id = $1");
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(project)
    }

    async fn find_all(pool: &PgPool) -> Result<Vec<Project>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM project ORDER BY created_at, id");
        let projects = sqlx::query_as::<_, Project>(&query).fetch_all(pool).await?;
        Ok(projects)
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM project WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
