//! The `/person` resource.

use timekeeper_db::models::Person;
use timekeeper_db::repositories::PersonRepo;

use crate::dto::PersonDto;
use crate::handlers::CrudResource;
use crate::mapper::PersonMapper;

pub struct PersonResource;

impl CrudResource for PersonResource {
    type Entity = Person;
    type Dto = PersonDto;
    type Repo = PersonRepo;
    type Map = PersonMapper;

    const ENTITY_NAME: &'static str = "Person";
}
