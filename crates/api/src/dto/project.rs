//! Project transfer object.

use serde::{Deserialize, Serialize};
use timekeeper_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::dto::{datetime, not_blank};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    /// Server-assigned; ignored on input.
    pub id: Option<DbId>,

    #[validate(required, custom(function = not_blank))]
    pub name: Option<String>,

    /// Server-assigned; ignored on input.
    #[serde(with = "datetime", default)]
    pub created_at: Option<Timestamp>,

    /// Server-assigned; ignored on input.
    #[serde(with = "datetime", default)]
    pub modified_at: Option<Timestamp>,
}
