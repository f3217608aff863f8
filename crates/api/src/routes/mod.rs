//! Route tree.

pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers::crud_router;
use crate::handlers::person::PersonResource;
use crate::handlers::project::ProjectResource;
use crate::handlers::task::{self, TaskResource};
use crate::state::AppState;

/// Build the application route tree (mounted at the root).
///
/// ```text
/// /person                 GET list, POST create
/// /person/{id}            GET, PUT, DELETE
///
/// /project                GET list, POST create
/// /project/{id}           GET, PUT, DELETE
///
/// /task                   GET list, POST create
/// /task/{id}              GET, PUT, DELETE
/// /task/{id}/start        POST -- NOT_STARTED -> STARTED
/// /task/{id}/finish       POST -- STARTED -> FINISHED
/// ```
pub fn api_routes() -> Router<AppState> {
    let task_routes = crud_router::<TaskResource>()
        .route("/{id}/start", post(task::start))
        .route("/{id}/finish", post(task::finish));

    Router::new()
        .nest("/person", crud_router::<PersonResource>())
        .nest("/project", crud_router::<ProjectResource>())
        .nest("/task", task_routes)
}
