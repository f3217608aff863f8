//! The `/task` resource, including the status transitions.
//!
//! `start` and `finish` are the only operations that mutate `status`,
//! `start_date`, and `finish_date` after creation; the generic update
//! path excludes them.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use timekeeper_core::error::CoreError;
use timekeeper_core::status::TaskStatus;
use timekeeper_db::models::Task;
use timekeeper_db::repositories::{Repository, TaskRepo};

use crate::dto::TaskDto;
use crate::error::AppResult;
use crate::handlers::{get_entity_by_id, parse_id, CrudResource};
use crate::mapper::{Mapper, TaskMapper};
use crate::state::AppState;

pub struct TaskResource;

impl CrudResource for TaskResource {
    type Entity = Task;
    type Dto = TaskDto;
    type Repo = TaskRepo;
    type Map = TaskMapper;

    const ENTITY_NAME: &'static str = "Task";
}

/// POST /task/{id}/start
pub async fn start(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TaskDto>> {
    let id = parse_id::<TaskResource>(&id)?;
    let mut entity = get_entity_by_id::<TaskResource>(&state.pool, id).await?;

    if !entity.status.can_start() {
        return Err(CoreError::InvalidStatus(
            "Task has already been started or finished!".to_string(),
        )
        .into());
    }

    entity.status = TaskStatus::Started;
    entity.start_date = Some(Utc::now());
    let saved = TaskRepo::save(&state.pool, entity).await?;

    Ok(Json(TaskMapper::to_dto(&saved)))
}

/// POST /task/{id}/finish
pub async fn finish(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TaskDto>> {
    let id = parse_id::<TaskResource>(&id)?;
    let mut entity = get_entity_by_id::<TaskResource>(&state.pool, id).await?;

    if !entity.status.can_finish() {
        return Err(
            CoreError::InvalidStatus("Task must have status \"STARTED\"!".to_string()).into(),
        );
    }

    entity.status = TaskStatus::Finished;
    entity.finish_date = Some(Utc::now());
    let saved = TaskRepo::save(&state.pool, entity).await?;

    Ok(Json(TaskMapper::to_dto(&saved)))
}
