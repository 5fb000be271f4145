//! Diet query handlers.
//!
//! Read-only handlers over the diet catalog and recommender.

mod list_diet_catalog;
mod suggest_diets;

pub use list_diet_catalog::{ListDietCatalogHandler, ListDietCatalogQuery, ListDietCatalogResult};
pub use suggest_diets::{SuggestDietsHandler, SuggestDietsQuery, SuggestDietsResult};
