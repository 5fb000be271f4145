//! SuggestDietsHandler - Query handler for the dietary approach explorer.
//!
//! Resolves the effective goal and BMI category from the profile snapshot and
//! request, then runs the recommender against the shared catalog.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::diet::{
    DietCatalog, DietRecommender, PreferenceSet, Recommendation, RecommendationRequest,
};
use crate::domain::foundation::{InputError, UserId};
use crate::domain::profile::{
    resolve_bmi, resolve_effective_goal, Bmi, BmiCategory, Goal, HealthProfile,
};

/// Query to suggest diet approaches for a user.
#[derive(Debug, Clone)]
pub struct SuggestDietsQuery {
    /// Authenticated user, for log correlation.
    pub user_id: UserId,
    /// Stored profile, if the user has one.
    pub profile: Option<HealthProfile>,
    /// Goal chosen for this request only; never persisted.
    pub goal_override: Option<String>,
    /// Height entered alongside the request.
    pub height_cm: Option<f64>,
    /// Weight entered alongside the request.
    pub weight_kg: Option<f64>,
    pub preferences: PreferenceSet,
}

/// Result of a successful suggestion query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestDietsResult {
    pub effective_goal: Goal,
    pub bmi: Option<Bmi>,
    pub bmi_category: Option<BmiCategory>,
    pub recommendation: Recommendation,
}

/// Handler for diet suggestions.
pub struct SuggestDietsHandler {
    catalog: Arc<DietCatalog>,
}

impl SuggestDietsHandler {
    pub fn new(catalog: Arc<DietCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: SuggestDietsQuery) -> Result<SuggestDietsResult, InputError> {
        self.suggest(&query).map_err(|err| {
            warn!(
                user_id = %query.user_id,
                field = err.field(),
                error = %err,
                "Rejected diet suggestion input"
            );
            err
        })
    }

    fn suggest(&self, query: &SuggestDietsQuery) -> Result<SuggestDietsResult, InputError> {
        let profile_goal = query.profile.as_ref().and_then(|p| p.goal.as_ref());
        let effective_goal = resolve_effective_goal(profile_goal, query.goal_override.as_deref())?;

        debug!(
            user_id = %query.user_id,
            goal = effective_goal.key(),
            from_override = profile_goal.and_then(|g| g.as_goal()).is_none(),
            "Resolved effective goal"
        );

        let bmi = resolve_bmi(query.profile.as_ref(), query.height_cm, query.weight_kg)?;
        let bmi_category = bmi.map(|b| b.category());

        let request = RecommendationRequest {
            goal: effective_goal,
            bmi_category,
            preferences: query.preferences,
        };
        let recommendation = DietRecommender::recommend(&self.catalog, &request);

        match recommendation.block() {
            Some(block) => warn!(
                user_id = %query.user_id,
                goal = effective_goal.key(),
                reason = ?block,
                "Diet suggestions withheld by safety gate"
            ),
            None => info!(
                user_id = %query.user_id,
                goal = effective_goal.key(),
                suggestions = recommendation.suggestions().len(),
                "Suggested diet approaches"
            ),
        }

        Ok(SuggestDietsResult {
            effective_goal,
            bmi,
            bmi_category,
            recommendation,
        })
    }
}
