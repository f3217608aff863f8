use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use timekeeper_core::error::CoreError;
use timekeeper_db::DbError;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON
/// error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `timekeeper_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence error from `timekeeper_db`.
    #[error(transparent)]
    Db(#[from] DbError),

    /// One or more DTO field violations.
    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::InvalidStatus(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            },

            AppError::Db(err) => classify_db_error(err),

            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                flatten_validation_errors(errors),
            ),

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a persistence error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - A stale optimistic version maps to 409.
/// - A reference without an id maps to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_db_error(err: &DbError) -> (StatusCode, &'static str, String) {
    match err {
        DbError::Sqlx(sqlx::Error::RowNotFound) => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        DbError::StaleVersion { .. } => (StatusCode::CONFLICT, "CONFLICT", err.to_string()),
        DbError::MissingReference { .. } => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
        }
        DbError::Sqlx(other) => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Render nested field violations as `path: message` pairs, sorted
/// for stable output.
fn flatten_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts = Vec::new();
    collect_violations(errors, "", &mut parts);
    parts.sort();
    parts.join("; ")
}

fn collect_violations(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(violations) => {
                for violation in violations {
                    let message = violation
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| violation.code.to_string());
                    out.push(format!("{path}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_violations(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_violations(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
    }

    #[test]
    fn flattens_field_violations_with_messages() {
        let errors = Probe {
            name: String::new(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(flatten_validation_errors(&errors), "name: must not be empty");
    }
}
