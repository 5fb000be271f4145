//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod diet;
pub mod wellness;

pub use diet::{
    ListDietCatalogHandler, ListDietCatalogQuery, ListDietCatalogResult, SuggestDietsHandler,
    SuggestDietsQuery, SuggestDietsResult,
};
pub use wellness::{AssessWellnessHandler, AssessWellnessQuery, AssessWellnessResult};
