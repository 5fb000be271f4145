//! Top-level API router and shared state.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::{
    AssessWellnessHandler, ListDietCatalogHandler, SuggestDietsHandler,
};
use crate::domain::diet::DietCatalog;

use super::diet::diet_routes;
use super::wellness::wellness_routes;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<DietCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<DietCatalog>) -> Self {
        Self { catalog }
    }

    pub fn suggest_diets_handler(&self) -> SuggestDietsHandler {
        SuggestDietsHandler::new(self.catalog.clone())
    }

    pub fn list_diet_catalog_handler(&self) -> ListDietCatalogHandler {
        ListDietCatalogHandler::new(self.catalog.clone())
    }

    pub fn assess_wellness_handler(&self) -> AssessWellnessHandler {
        AssessWellnessHandler::new()
    }
}

/// Builds the full router with tracing and request timeout layers.
pub fn api_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(diet_routes())
        .merge(wellness_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}
