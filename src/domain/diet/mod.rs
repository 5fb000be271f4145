//! Diet Module - catalog of dietary approaches and the recommender over it.
//!
//! # Components
//!
//! - `DietCatalog` - Read-only reference table, built in or loaded from YAML
//! - `AffinityTable` - Fixed (preference, diet) → score delta mapping
//! - `DietRecommender` - Safety gate, scoring and top-N ranking
//!
//! Everything here is pure: the catalog is never mutated after startup, so
//! concurrent requests share it without coordination.

mod catalog;
mod preferences;
mod recommender;

pub use catalog::{CatalogError, DietCatalog, DietEntry};
pub use preferences::{AffinityTable, Preference, PreferenceSet};
pub use recommender::{
    DietRecommender, Recommendation, RecommendationRequest, SafetyBlock, ScoredDiet,
    BASE_GOAL_SCORE, MAX_SUGGESTIONS,
};
