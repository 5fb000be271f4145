//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the Health Compass domain.

mod errors;
mod ids;
mod percentage;

pub use errors::{ErrorCode, InputError};
pub use ids::UserId;
pub use percentage::Percentage;
