//! The `/project` resource.

use timekeeper_db::models::Project;
use timekeeper_db::repositories::ProjectRepo;

use crate::dto::ProjectDto;
use crate::handlers::CrudResource;
use crate::mapper::ProjectMapper;

pub struct ProjectResource;

impl CrudResource for ProjectResource {
    type Entity = Project;
    type Dto = ProjectDto;
    type Repo = ProjectRepo;
    type Map = ProjectMapper;

    const ENTITY_NAME: &'static str = "Project";
}
