//! HTTP-level tests for request validation failures.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::Value;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn person_requires_a_name(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/person", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("name"));

    let app = common::build_test_app(pool);
    let response = post_json(app, "/person", serde_json::json!({"name": "  "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn task_requires_contributors_and_project(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/task",
        serde_json::json!({
            "description": "No references",
            "status": "NOT_STARTED",
            "contributors": [],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("contributors"));
    assert!(message.contains("project"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn task_contributor_violations_cascade(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let project = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            "/project",
            serde_json::json!({"name": "Roadmap"}),
        )
        .await,
    )
    .await;

    let response = post_json(
        app,
        "/task",
        serde_json::json!({
            "description": "Bad contributor",
            "status": "NOT_STARTED",
            "contributors": [{"name": "  "}],
            "project": project,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response)
        .await["error"]
        .as_str()
        .unwrap()
        .contains("contributors"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn task_dates_must_not_be_in_the_future(pool: PgPool) {
    let future = (chrono::Utc::now() + chrono::Duration::days(1))
        .format("%Y-%m-%dT%H:%M:%S%.3f")
        .to_string();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/task",
        serde_json::json!({
            "description": "Time traveller",
            "status": "NOT_STARTED",
            "startDate": Value::from(future),
            "contributors": [{"name": "Alice"}],
            "project": {"name": "Roadmap"},
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response)
        .await["error"]
        .as_str()
        .unwrap()
        .contains("future"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_date_is_rejected_at_deserialization(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/task",
        serde_json::json!({
            "description": "Bad date",
            "status": "NOT_STARTED",
            "startDate": "2024-03-07",
            "contributors": [{"name": "Alice"}],
            "project": {"name": "Roadmap"},
        }),
    )
    .await;
    // Axum's Json extractor rejects the body before validation runs.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
