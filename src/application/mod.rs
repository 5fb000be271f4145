//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations. Every operation is a read-only
//! query; nothing is persisted.

pub mod handlers;

pub use handlers::{
    AssessWellnessHandler, AssessWellnessQuery, AssessWellnessResult, ListDietCatalogHandler,
    ListDietCatalogQuery, ListDietCatalogResult, SuggestDietsHandler, SuggestDietsQuery,
    SuggestDietsResult,
};
