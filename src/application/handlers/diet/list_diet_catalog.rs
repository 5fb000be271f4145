//! ListDietCatalogHandler - Query handler for browsing the diet catalog.

use std::sync::Arc;

use crate::domain::diet::{DietCatalog, DietEntry};
use crate::domain::foundation::InputError;
use crate::domain::profile::Goal;

/// Query to list catalog entries.
#[derive(Debug, Clone, Default)]
pub struct ListDietCatalogQuery {
    /// Optional goal filter, as a goal key or label.
    pub goal: Option<String>,
}

/// Result of a catalog listing, in declaration order.
pub type ListDietCatalogResult = Vec<DietEntry>;

/// Handler for catalog listings.
pub struct ListDietCatalogHandler {
    catalog: Arc<DietCatalog>,
}

impl ListDietCatalogHandler {
    pub fn new(catalog: Arc<DietCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: ListDietCatalogQuery) -> Result<ListDietCatalogResult, InputError> {
        let goal = query
            .goal
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::parse::<Goal>)
            .transpose()?;

        let entries = match goal {
            Some(goal) => self.catalog.for_goal(goal).cloned().collect(),
            None => self.catalog.entries().to_vec(),
        };

        Ok(entries)
    }
}
