//! PostgreSQL persistence layer: pool construction, embedded
//! migrations, entity models, and repositories.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Errors surfaced by the repository layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// A save carried a version that no longer matches the stored row.
    /// The write was rejected; the caller holds a stale copy.
    #[error("{entity} was modified concurrently (stale version {version})")]
    StaleVersion { entity: &'static str, version: i64 },

    /// A task referenced a person or project that has never been
    /// saved (no id to store the reference by).
    #[error("{entity} reference is missing an id")]
    MissingReference { entity: &'static str },
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
