//! HTTP routes for diet endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::router::AppState;

use super::handlers::{list_diets, recommend_diets};

/// Creates the diet router.
pub fn diet_routes() -> Router<AppState> {
    Router::new()
        // GET /api/diets
        .route("/api/diets", get(list_diets))
        // POST /api/diets/recommendations
        .route("/api/diets/recommendations", post(recommend_diets))
}
