//! Entity models.
//!
//! Each struct matches its database row; server-owned fields (id,
//! timestamps) are `Option` so an unsaved entity can exist without
//! them. They are populated by the repository on save, never by
//! client input.

pub mod person;
pub mod project;
pub mod task;

pub use person::Person;
pub use project::Project;
pub use task::Task;
