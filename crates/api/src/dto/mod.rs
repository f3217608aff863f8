//! Wire transfer objects.
//!
//! All fields are `Option`: a missing or `null` field is simply not
//! mapped onto the entity (never an overwrite with null). Validation
//! runs on the DTO in the handler, before any mapping; the rules here
//! enforce presence and shape where the contract requires it.

pub mod datetime;
pub mod person;
pub mod project;
pub mod task;

pub use person::PersonDto;
pub use project::ProjectDto;
pub use task::{TaskDto, TaskStatusDto};

use chrono::Utc;
use timekeeper_core::types::Timestamp;
use validator::ValidationError;

/// Rejects values that are empty or whitespace-only.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Rejects timestamps in the future.
pub(crate) fn past_or_present(value: &Timestamp) -> Result<(), ValidationError> {
    if *value > Utc::now() {
        return Err(
            ValidationError::new("past_or_present")
                .with_message("must not be in the future".into()),
        );
    }
    Ok(())
}
