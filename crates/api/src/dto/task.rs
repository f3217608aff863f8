//! Task transfer object.
//!
//! Contributors and project are embedded as full DTOs on both input
//! and output; on input only their ids matter (they are references to
//! independently owned records). `startDate`, `finishDate`, and
//! `status` are accepted here for validation but never mapped from
//! client input; they change only through the start/finish
//! transitions.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use timekeeper_core::status::TaskStatus;
use timekeeper_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::dto::{datetime, not_blank, past_or_present, PersonDto, ProjectDto};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    /// Server-assigned; ignored on input.
    pub id: Option<DbId>,

    #[validate(required, custom(function = not_blank))]
    pub description: Option<String>,

    #[validate(custom(function = past_or_present))]
    #[serde(with = "datetime", default)]
    pub start_date: Option<Timestamp>,

    #[validate(custom(function = past_or_present))]
    #[serde(with = "datetime", default)]
    pub finish_date: Option<Timestamp>,

    #[validate(required)]
    pub status: Option<TaskStatusDto>,

    #[validate(required, length(min = 1, message = "must not be empty"), nested)]
    pub contributors: Option<Vec<PersonDto>>,

    #[validate(required, nested)]
    pub project: Option<ProjectDto>,

    /// Server-assigned; ignored on input.
    #[serde(with = "datetime", default)]
    pub created_at: Option<Timestamp>,

    /// Server-assigned; ignored on input.
    #[serde(with = "datetime", default)]
    pub modified_at: Option<Timestamp>,
}

/// Wire mirror of [`TaskStatus`].
///
/// Deserialization is lossy: an unrecognized status string reads as
/// `NOT_STARTED` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatusDto {
    #[default]
    NotStarted,
    Started,
    Finished,
}

impl TaskStatusDto {
    pub fn as_str(self) -> &'static str {
        TaskStatus::from(self).as_str()
    }
}

impl From<TaskStatus> for TaskStatusDto {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::NotStarted => TaskStatusDto::NotStarted,
            TaskStatus::Started => TaskStatusDto::Started,
            TaskStatus::Finished => TaskStatusDto::Finished,
        }
    }
}

impl From<TaskStatusDto> for TaskStatus {
    fn from(status: TaskStatusDto) -> Self {
        match status {
            TaskStatusDto::NotStarted => TaskStatus::NotStarted,
            TaskStatusDto::Started => TaskStatus::Started,
            TaskStatusDto::Finished => TaskStatus::Finished,
        }
    }
}

impl Serialize for TaskStatusDto {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskStatusDto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(TaskStatusDto::from(TaskStatus::from_str_lossy(&value)))
    }
}
