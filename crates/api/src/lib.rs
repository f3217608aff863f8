//! HTTP layer: DTOs, mappers, CRUD handlers, and the router.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;
pub mod state;
