//! Repository for the `person` table.

use async_trait::async_trait;
use sqlx::PgPool;
use timekeeper_core::types::{DbId, Identified};

use crate::models::Person;
use crate::repositories::Repository;
use crate::DbError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, modified_at, version";

/// Provides CRUD operations for persons.
pub struct PersonRepo;

#[async_trait]
impl Repository for PersonRepo {
    type Entity = Person;

    async fn save(pool: &PgPool, entity: Person) -> Result<Person, DbError> {
        match entity.id() {
            None => {
                let query =
                    format!("INSERT INTO person (name) VALUES ($1) RETURNING {COLUMNS}");
                let saved = sqlx::query_as::<_, Person>(&query)
                    .bind(&entity.name)
                    .fetch_one(pool)
                    .await?;
                Ok(saved)
            }
            Some(id) => {
                let query = format!(
                    "UPDATE person SET name = $2, modified_at = NOW(), version = version + 1
                     WHERE id = $1 AND version = $3
                     RETURNING {COLUMNS}"
                );
                let updated = sqlx::query_as::<_, Person>(&query)
                    .bind(id)
                    .bind(&entity.name)
                    .bind(entity.version)
                    .fetch_optional(pool)
                    .await?;
                match updated {
                    Some(person) => Ok(person),
                    None => Err(stale_or_missing(pool, "person", "Person", id, entity.version).await?),
                }
            }
        }
    }

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM person WHERE id = $1");
        let person = sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(person)
    }

    async fn find_all(pool: &PgPool) -> Result<Vec<Person>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM person ORDER BY created_at, id");
        let persons = sqlx::query_as::<_, Person>(&query).fetch_all(pool).await?;
        Ok(persons)
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM person WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Distinguish a conditional-write miss: the row exists with another
/// version (stale save) or is gone entirely.
pub(crate) async fn stale_or_missing(
    pool: &PgPool,
    table: &str,
    entity: &'static str,
    id: DbId,
    version: i64,
) -> Result<DbError, sqlx::Error> {
    let query = format!("SELECT EXISTS (SELECT 1 FROM {table} WHERE id = $1)");
    let exists: bool = sqlx::query_scalar(&query).bind(id).fetch_one(pool).await?;
    if exists {
        Ok(DbError::StaleVersion { entity, version })
    } else {
        Ok(DbError::Sqlx(sqlx::Error::RowNotFound))
    }
}
