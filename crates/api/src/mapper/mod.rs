//! Entity <-> DTO conversion.
//!
//! Mapping is pure and total: it never rejects data (validation runs
//! on the DTO before mapping) and it never copies server-owned fields
//! from client input. The inbound policy is an explicit allow-list:
//! only client-settable fields are copied, and a `None` DTO field is
//! skipped rather than overwriting the entity value.

pub mod person;
pub mod project;
pub mod task;

pub use person::PersonMapper;
pub use project::ProjectMapper;
pub use task::TaskMapper;

/// Bidirectional, lossy-by-design conversion between an entity and
/// its transfer object.
pub trait Mapper {
    type Entity;
    type Dto;

    /// Build a new entity from the DTO's client-settable fields.
    ///
    /// Server-owned fields (id, timestamps, version) are left unset
    /// regardless of what the DTO carries.
    fn to_entity(dto: &Self::Dto) -> Self::Entity;

    /// Full 1:1 copy of the entity onto the wire shape.
    fn to_dto(entity: &Self::Entity) -> Self::Dto;

    /// Map a slice of entities, preserving length and order.
    fn map_to_dto(entities: &[Self::Entity]) -> Vec<Self::Dto> {
        entities.iter().map(Self::to_dto).collect()
    }

    /// Copy the DTO's client-settable fields onto an existing entity.
    ///
    /// `None` DTO fields leave the entity untouched; nested
    /// references are replaced wholesale when present.
    fn update(dto: &Self::Dto, entity: &mut Self::Entity);
}
