//! Project mapping.

use timekeeper_db::models::Project;

use crate::dto::ProjectDto;
use crate::mapper::Mapper;

pub struct ProjectMapper;

impl Mapper for ProjectMapper {
    type Entity = Project;
    type Dto = ProjectDto;

    fn to_entity(dto: &ProjectDto) -> Project {
        let mut entity = Project::default();
        Self::update(dto, &mut entity);
        entity
    }

    fn to_dto(entity: &Project) -> ProjectDto {
        ProjectDto {
            id: entity.id,
            name: Some(entity.name.clone()),
            created_at: entity.created_at,
            modified_at: entity.modified_at,
        }
    }

    fn update(dto: &ProjectDto, entity: &mut Project) {
        if let Some(name) = &dto.name {
            entity.name = name.clone();
        }
    }
}
