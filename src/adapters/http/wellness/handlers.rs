//! HTTP handlers for wellness endpoints.

use axum::extract::{Json, State};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::AuthenticatedUser;
use crate::adapters::http::router::AppState;

use super::dto::{AssessWellnessResult, AssessmentRequestDto};

/// POST /api/wellness/assessment
///
/// Scores every questionnaire and reports the one that was submitted.
pub async fn assess_wellness(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(body): Json<AssessmentRequestDto>,
) -> Result<Json<AssessWellnessResult>, ApiError> {
    let query = body.into_query(user.user_id)?;
    let report = state.assess_wellness_handler().handle(query)?;
    Ok(Json(report))
}
