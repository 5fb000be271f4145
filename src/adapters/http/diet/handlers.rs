//! HTTP handlers for diet endpoints.

use axum::extract::{Json, Query, State};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::AuthenticatedUser;
use crate::adapters::http::router::AppState;

use super::dto::{CatalogParams, DietEntry, RecommendationRequestDto, SuggestDietsResult};

/// GET /api/diets?goal=
///
/// Lists catalog entries, optionally only those supporting one goal.
pub async fn list_diets(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<DietEntry>>, ApiError> {
    let entries = state.list_diet_catalog_handler().handle(params.into())?;
    Ok(Json(entries))
}

/// POST /api/diets/recommendations
///
/// Returns up to three ranked approaches, or the safety block that withheld them.
pub async fn recommend_diets(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(body): Json<RecommendationRequestDto>,
) -> Result<Json<SuggestDietsResult>, ApiError> {
    let query = body.into_query(user.user_id);
    let result = state.suggest_diets_handler().handle(query)?;
    Ok(Json(result))
}
