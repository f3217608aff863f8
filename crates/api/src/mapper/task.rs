//! Task mapping.
//!
//! On top of the shared exclusions (id, timestamps), inbound task
//! mapping also excludes `start_date`, `finish_date`, and `status`: a
//! newly created task always begins `NOT_STARTED` with no dates, and
//! those fields change only through the start/finish transitions.

use timekeeper_db::models::{Person, Project, Task};

use crate::dto::{PersonDto, ProjectDto, TaskDto, TaskStatusDto};
use crate::mapper::{Mapper, PersonMapper, ProjectMapper};

pub struct TaskMapper;

impl Mapper for TaskMapper {
    type Entity = Task;
    type Dto = TaskDto;

    fn to_entity(dto: &TaskDto) -> Task {
        let mut entity = Task::default();
        Self::update(dto, &mut entity);
        entity
    }

    fn to_dto(entity: &Task) -> TaskDto {
        TaskDto {
            id: entity.id,
            description: Some(entity.description.clone()),
            start_date: entity.start_date,
            finish_date: entity.finish_date,
            status: Some(TaskStatusDto::from(entity.status)),
            contributors: Some(PersonMapper::map_to_dto(&entity.contributors)),
            project: entity.project.as_ref().map(ProjectMapper::to_dto),
            created_at: entity.created_at,
            modified_at: entity.modified_at,
        }
    }

    fn update(dto: &TaskDto, entity: &mut Task) {
        if let Some(description) = &dto.description {
            entity.description = description.clone();
        }
        if let Some(contributors) = &dto.contributors {
            entity.contributors = contributors.iter().map(person_ref).collect();
        }
        if let Some(project) = &dto.project {
            entity.project = Some(project_ref(project));
        }
        // start_date, finish_date, and status are never taken from
        // client input.
    }
}

/// Materialize a contributor reference, keeping its id: the person is
/// owned by its own collection, the task only points at it.
fn person_ref(dto: &PersonDto) -> Person {
    Person {
        id: dto.id,
        name: dto.name.clone().unwrap_or_default(),
        created_at: dto.created_at,
        modified_at: dto.modified_at,
        version: 0,
    }
}

fn project_ref(dto: &ProjectDto) -> Project {
    Project {
        id: dto.id,
        name: dto.name.clone().unwrap_or_default(),
        created_at: dto.created_at,
        modified_at: dto.modified_at,
        version: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use timekeeper_core::status::TaskStatus;
    use uuid::Uuid;

    fn full_dto() -> TaskDto {
        TaskDto {
            id: Some(Uuid::new_v4()),
            description: Some("Write report".to_string()),
            start_date: Some(Utc::now()),
            finish_date: Some(Utc::now()),
            status: Some(TaskStatusDto::Finished),
            contributors: Some(vec![
                PersonDto {
                    id: Some(Uuid::new_v4()),
                    name: Some("Alice".to_string()),
                    ..PersonDto::default()
                },
                PersonDto {
                    id: Some(Uuid::new_v4()),
                    name: Some("Bob".to_string()),
                    ..PersonDto::default()
                },
            ]),
            project: Some(ProjectDto {
                id: Some(Uuid::new_v4()),
                name: Some("Roadmap".to_string()),
                ..ProjectDto::default()
            }),
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    #[test]
    fn to_entity_starts_every_task_fresh() {
        // Client-supplied status/dates are ignored on creation.
        let entity = TaskMapper::to_entity(&full_dto());

        assert_eq!(entity.status, TaskStatus::NotStarted);
        assert!(entity.start_date.is_none());
        assert!(entity.finish_date.is_none());
        assert!(entity.id.is_none());
        assert!(entity.created_at.is_none());
        assert!(entity.modified_at.is_none());
        assert_eq!(entity.description, "Write report");
    }

    #[test]
    fn to_entity_keeps_reference_ids() {
        let dto = full_dto();
        let entity = TaskMapper::to_entity(&dto);

        let contributor_ids: Vec<_> = entity.contributors.iter().map(|p| p.id).collect();
        let dto_ids: Vec<_> = dto
            .contributors
            .as_ref()
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(contributor_ids, dto_ids);
        assert_eq!(
            entity.project.as_ref().unwrap().id,
            dto.project.as_ref().unwrap().id
        );
    }

    #[test]
    fn to_dto_is_a_full_copy() {
        let project = Project {
            id: Some(Uuid::new_v4()),
            name: "Roadmap".to_string(),
            ..Project::default()
        };
        let entity = Task {
            id: Some(Uuid::new_v4()),
            description: "Write report".to_string(),
            start_date: Some(Utc::now()),
            finish_date: None,
            status: TaskStatus::Started,
            contributors: vec![Person {
                id: Some(Uuid::new_v4()),
                name: "Alice".to_string(),
                ..Person::default()
            }],
            project: Some(project),
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
            version: 3,
        };

        let dto = TaskMapper::to_dto(&entity);
        assert_eq!(dto.id, entity.id);
        assert_eq!(dto.description.as_deref(), Some("Write report"));
        assert_eq!(dto.start_date, entity.start_date);
        assert_eq!(dto.status, Some(TaskStatusDto::Started));
        assert_eq!(dto.contributors.as_ref().unwrap().len(), 1);
        assert_eq!(dto.project.as_ref().unwrap().name.as_deref(), Some("Roadmap"));
        assert_eq!(dto.created_at, entity.created_at);
    }

    #[test]
    fn update_never_touches_status_or_dates() {
        let mut entity = Task {
            description: "Original".to_string(),
            status: TaskStatus::Started,
            start_date: Some(Utc::now()),
            ..Task::default()
        };
        let started_at = entity.start_date;

        TaskMapper::update(&full_dto(), &mut entity);

        assert_eq!(entity.description, "Write report");
        assert_eq!(entity.status, TaskStatus::Started);
        assert_eq!(entity.start_date, started_at);
        assert!(entity.finish_date.is_none());
    }

    #[test]
    fn update_replaces_references_wholesale() {
        let mut entity = Task {
            contributors: vec![Person {
                id: Some(Uuid::new_v4()),
                name: "Old".to_string(),
                ..Person::default()
            }],
            ..Task::default()
        };

        let dto = full_dto();
        TaskMapper::update(&dto, &mut entity);
        assert_eq!(entity.contributors.len(), 2);

        // A DTO without contributors leaves the list alone.
        let partial = TaskDto {
            description: Some("Renamed".to_string()),
            ..TaskDto::default()
        };
        TaskMapper::update(&partial, &mut entity);
        assert_eq!(entity.contributors.len(), 2);
        assert_eq!(entity.description, "Renamed");
    }
}
