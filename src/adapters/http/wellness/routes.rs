//! HTTP routes for wellness endpoints.

use axum::routing::post;
use axum::Router;

use crate::adapters::http::router::AppState;

use super::handlers::assess_wellness;

/// Creates the wellness router.
pub fn wellness_routes() -> Router<AppState> {
    // POST /api/wellness/assessment
    Router::new().route("/api/wellness/assessment", post(assess_wellness))
}
