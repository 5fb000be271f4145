//! Diet HTTP adapter module.
//!
//! Catalog browsing and the dietary approach explorer.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::diet_routes;
