//! Repository for the `task` table and its contributor references.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use timekeeper_core::status::TaskStatus;
use timekeeper_core::types::{DbId, Identified, Timestamp};

use crate::models::{Person, Task};
use crate::repositories::person_repo::stale_or_missing;
use crate::repositories::{ProjectRepo, Repository};
use crate::DbError;

const COLUMNS: &str =
    "id, description, start_date, finish_date, status, project_id, created_at, modified_at, version";

/// Raw `task` row; references are resolved separately.
#[derive(Debug, FromRow)]
struct TaskRow {
    id: DbId,
    description: String,
    start_date: Option<Timestamp>,
    finish_date: Option<Timestamp>,
    status: String,
    project_id: DbId,
    created_at: Timestamp,
    modified_at: Timestamp,
    version: i64,
}

/// Provides CRUD operations for tasks, including contributor
/// reference maintenance.
pub struct TaskRepo;

#[async_trait]
impl Repository for TaskRepo {
    type Entity = Task;

    async fn save(pool: &PgPool, entity: Task) -> Result<Task, DbError> {
        let project_id = entity
            .project
            .as_ref()
            .and_then(|project| project.id)
            .ok_or(DbError::MissingReference { entity: "Project" })?;
        let contributor_ids = entity
            .contributors
            .iter()
            .map(|person| person.id.ok_or(DbError::MissingReference { entity: "Person" }))
            .collect::<Result<Vec<_>, _>>()?;

        let mut tx = pool.begin().await?;

        let id = match entity.id() {
            None => {
                let query = format!(
                    "INSERT INTO task (description, start_date, finish_date, status, project_id)
                     VALUES ($1, $2, $3, $4, $5)
                     RETURNING {COLUMNS}"
                );
                let row = sqlx::query_as::<_, TaskRow>(&query)
                    .bind(&entity.description)
                    .bind(entity.start_date)
                    .bind(entity.finish_date)
                    .bind(entity.status.as_str())
                    .bind(project_id)
                    .fetch_one(&mut *tx)
                    .await?;
                row.id
            }
            Some(id) => {
                let query = format!(
                    "UPDATE task SET description = $2, start_date = $3, finish_date = $4,
                        status = $5, project_id = $6,
                        modified_at = NOW(), version = version + 1
                     WHERE id = $1 AND version = $7
                     RETURNING {COLUMNS}"
                );
                let updated = sqlx::query_as::<_, TaskRow>(&query)
                    .bind(id)
                    .bind(&entity.description)
                    .bind(entity.start_date)
                    .bind(entity.finish_date)
                    .bind(entity.status.as_str())
                    .bind(project_id)
                    .bind(entity.version)
                    .fetch_optional(&mut *tx)
                    .await?;
                match updated {
                    Some(row) => row.id,
                    None => {
                        tx.rollback().await?;
                        return Err(
                            stale_or_missing(pool, "task", "Task", id, entity.version).await?
                        );
                    }
                }
            }
        };

        // Contributor references are replaced wholesale, keeping the
        // order they arrived in.
        sqlx::query("DELETE FROM task_contributor WHERE task_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        for (position, person_id) in contributor_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO task_contributor (task_id, person_id, position) VALUES ($1, $2, $3)",
            )
            .bind(id)
            .bind(person_id)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(DbError::Sqlx(sqlx::Error::RowNotFound))
    }

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM task WHERE id = $1");
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        match row {
            Some(row) => Ok(Some(assemble(pool, row).await?)),
            None => Ok(None),
        }
    }

    async fn find_all(pool: &PgPool) -> Result<Vec<Task>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM task ORDER BY created_at, id");
        let rows = sqlx::query_as::<_, TaskRow>(&query).fetch_all(pool).await?;
        let mut tasks = Vec::with_capacity(rows.len());
        for row in rows {
            tasks.push(assemble(pool, row).await?);
        }
        Ok(tasks)
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM task WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Resolve the project and contributor references for a task row.
///
/// References to rows deleted out from under the task are dropped: a
/// missing project reads back as `None`, missing contributors are
/// absent from the list.
async fn assemble(pool: &PgPool, row: TaskRow) -> Result<Task, DbError> {
    let project = ProjectRepo::find_by_id(pool, row.project_id).await?;
    let contributors = sqlx::query_as::<_, Person>(
        "SELECT p.id, p.name, p.created_at, p.modified_at, p.version
         FROM task_contributor tc
         JOIN person p ON p.id = tc.person_id
         WHERE tc.task_id = $1
         ORDER BY tc.position",
    )
    .bind(row.id)
    .fetch_all(pool)
    .await?;

    Ok(Task {
        id: Some(row.id),
        description: row.description,
        start_date: row.start_date,
        finish_date: row.finish_date,
        status: TaskStatus::from_str_lossy(&row.status),
        contributors,
        project,
        created_at: Some(row.created_at),
        modified_at: Some(row.modified_at),
        version: row.version,
    })
}
