//! Wellness HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::wellness_routes;
