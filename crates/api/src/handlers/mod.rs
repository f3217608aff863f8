//! Request handlers.
//!
//! The CRUD core is generic: a [`CrudResource`] bundles an entity, its
//! DTO, the repository, and the mapper, and the free functions below
//! are instantiated per resource when routes are mounted. Flow for
//! writes: validate DTO -> map -> save -> re-read by id (so the
//! response reflects exactly what the store persisted, including
//! server-computed fields) -> map back.

pub mod person;
pub mod project;
pub mod task;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::PgPool;
use timekeeper_core::error::CoreError;
use timekeeper_core::types::{DbId, Identified};
use timekeeper_db::repositories::Repository;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::mapper::Mapper;
use crate::state::AppState;

/// Capability bundle tying one entity to its DTO, repository, and
/// mapper. Implemented by a zero-sized marker per resource.
pub trait CrudResource: Send + Sync + 'static {
    type Entity: Identified + Send + Sync + 'static;
    type Dto: Serialize + DeserializeOwned + Validate + Send + Sync + 'static;
    type Repo: Repository<Entity = Self::Entity>;
    type Map: Mapper<Entity = Self::Entity, Dto = Self::Dto>;

    /// Entity name used in `"<EntityName> not found"` messages.
    const ENTITY_NAME: &'static str;
}

/// Standard CRUD route set for one resource.
///
/// ```text
/// GET    /      -> get_all
/// POST   /      -> create
/// GET    /{id}  -> get_one
/// PUT    /{id}  -> update
/// DELETE /{id}  -> remove
/// ```
pub fn crud_router<R: CrudResource>() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all::<R>).post(create::<R>))
        .route(
            "/{id}",
            get(get_one::<R>).put(update::<R>).delete(remove::<R>),
        )
}

/// POST /
pub async fn create<R: CrudResource>(
    State(state): State<AppState>,
    Json(dto): Json<R::Dto>,
) -> AppResult<(StatusCode, Json<R::Dto>)> {
    dto.validate()?;
    let entity = R::Map::to_entity(&dto);
    let saved = R::Repo::save(&state.pool, entity).await?;
    let id = saved
        .id()
        .ok_or_else(|| AppError::Internal(format!("{} saved without an id", R::ENTITY_NAME)))?;
    let entity = get_entity_by_id::<R>(&state.pool, id).await?;
    Ok((StatusCode::CREATED, Json(R::Map::to_dto(&entity))))
}

/// GET /
pub async fn get_all<R: CrudResource>(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<R::Dto>>> {
    let entities = R::Repo::find_all(&state.pool).await?;
    Ok(Json(R::Map::map_to_dto(&entities)))
}

/// GET /{id}
pub async fn get_one<R: CrudResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<R::Dto>> {
    let entity = get_entity_by_id::<R>(&state.pool, parse_id::<R>(&id)?).await?;
    Ok(Json(R::Map::to_dto(&entity)))
}

/// PUT /{id}
pub async fn update<R: CrudResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<R::Dto>,
) -> AppResult<Json<R::Dto>> {
    dto.validate()?;
    let mut entity = get_entity_by_id::<R>(&state.pool, parse_id::<R>(&id)?).await?;
    R::Map::update(&dto, &mut entity);
    let saved = R::Repo::save(&state.pool, entity).await?;
    let id = saved
        .id()
        .ok_or_else(|| AppError::Internal(format!("{} saved without an id", R::ENTITY_NAME)))?;
    let entity = get_entity_by_id::<R>(&state.pool, id).await?;
    Ok(Json(R::Map::to_dto(&entity)))
}

/// DELETE /{id} -- returns the DTO snapshot of what was deleted.
pub async fn remove<R: CrudResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<R::Dto>> {
    let id = parse_id::<R>(&id)?;
    let entity = get_entity_by_id::<R>(&state.pool, id).await?;
    R::Repo::delete(&state.pool, id).await?;
    Ok(Json(R::Map::to_dto(&entity)))
}

/// Any string that is not a well-formed id cannot name a stored
/// record, so it reads as absent rather than malformed.
pub(crate) fn parse_id<R: CrudResource>(raw: &str) -> Result<DbId, AppError> {
    raw.parse().map_err(|_| {
        AppError::Core(CoreError::NotFound {
            entity: R::ENTITY_NAME,
        })
    })
}

/// Fetch an entity or fail with `"<EntityName> not found"`.
pub(crate) async fn get_entity_by_id<R: CrudResource>(
    pool: &PgPool,
    id: DbId,
) -> Result<R::Entity, AppError> {
    R::Repo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: R::ENTITY_NAME,
            })
        })
}
