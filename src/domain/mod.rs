//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `profile` - Goals and body-mass classification read from the user profile
//! - `diet` - Diet catalog and the diet-approach recommender
//! - `wellness` - Questionnaire domains and the wellness-likelihood aggregator

pub mod diet;
pub mod foundation;
pub mod profile;
pub mod wellness;
