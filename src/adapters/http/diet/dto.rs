//! HTTP DTOs for diet endpoints.

use serde::Deserialize;

use crate::application::handlers::{ListDietCatalogQuery, SuggestDietsQuery};
use crate::domain::diet::PreferenceSet;
use crate::domain::foundation::UserId;
use crate::domain::profile::{HealthProfile, ProfileGoal};

pub use crate::application::handlers::SuggestDietsResult;
pub use crate::domain::diet::DietEntry;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Profile fields as stored by the profile form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HealthProfileDto {
    /// Goal selection, or the stored free-text goal.
    pub goal: Option<String>,
    /// Text typed next to the "Other" selection.
    pub goal_other: Option<String>,
    pub bmi: Option<f64>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

impl From<HealthProfileDto> for HealthProfile {
    fn from(dto: HealthProfileDto) -> Self {
        let goal = dto
            .goal
            .as_deref()
            .and_then(|selection| ProfileGoal::from_form(selection, dto.goal_other.as_deref()));

        HealthProfile {
            goal,
            bmi: dto.bmi,
            height_cm: dto.height_cm,
            weight_kg: dto.weight_kg,
        }
    }
}

/// Request body for diet recommendations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecommendationRequestDto {
    pub profile: Option<HealthProfileDto>,
    pub goal_override: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub preferences: PreferenceSet,
}

impl RecommendationRequestDto {
    pub fn into_query(self, user_id: UserId) -> SuggestDietsQuery {
        SuggestDietsQuery {
            user_id,
            profile: self.profile.map(HealthProfile::from),
            goal_override: self.goal_override,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            preferences: self.preferences,
        }
    }
}

/// Query parameters for the catalog listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogParams {
    pub goal: Option<String>,
}

impl From<CatalogParams> for ListDietCatalogQuery {
    fn from(params: CatalogParams) -> Self {
        ListDietCatalogQuery { goal: params.goal }
    }
}
