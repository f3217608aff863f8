//! Person mapping.

use timekeeper_db::models::Person;

use crate::dto::PersonDto;
use crate::mapper::Mapper;

pub struct PersonMapper;

impl Mapper for PersonMapper {
    type Entity = Person;
    type Dto = PersonDto;

    fn to_entity(dto: &PersonDto) -> Person {
        let mut entity = Person::default();
        Self::update(dto, &mut entity);
        entity
    }

    fn to_dto(entity: &Person) -> PersonDto {
        PersonDto {
            id: entity.id,
            name: Some(entity.name.clone()),
            created_at: entity.created_at,
            modified_at: entity.modified_at,
        }
    }

    fn update(dto: &PersonDto, entity: &mut Person) {
        if let Some(name) = &dto.name {
            entity.name = name.clone();
        }
    }
}
