//! Diet Recommender - safety gating and preference scoring over the catalog.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{BmiBucket, BmiCategory, Goal};

use super::{AffinityTable, DietCatalog, DietEntry, PreferenceSet};

/// Fixed score every goal-matching entry starts from.
pub const BASE_GOAL_SCORE: i32 = 5;

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 3;

/// Reason a recommendation was withheld on safety grounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyBlock {
    WeightLossWhileUnderweight,
    WeightGainWhileOverweight,
}

impl SafetyBlock {
    /// Returns the block that applies to this goal and BMI category, if any.
    ///
    /// An unknown category never blocks.
    pub fn check(goal: Goal, bmi_category: Option<BmiCategory>) -> Option<Self> {
        match (goal, bmi_category.map(|c| c.bucket())) {
            (Goal::WeightLoss, Some(BmiBucket::Underweight)) => {
                Some(SafetyBlock::WeightLossWhileUnderweight)
            }
            (Goal::WeightGain, Some(BmiBucket::Overweight)) => {
                Some(SafetyBlock::WeightGainWhileOverweight)
            }
            _ => None,
        }
    }

    /// Returns the message shown instead of suggestions.
    pub fn message(&self) -> &'static str {
        match self {
            SafetyBlock::WeightLossWhileUnderweight => {
                "Weight-loss approaches are not appropriate for an underweight BMI. \
                 Please speak to a healthcare professional for guidance."
            }
            SafetyBlock::WeightGainWhileOverweight => {
                "Weight-gain approaches are not appropriate for an overweight BMI. \
                 Please speak to a healthcare professional for guidance."
            }
        }
    }
}

/// A catalog entry annotated with its total score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredDiet {
    #[serde(flatten)]
    pub entry: DietEntry,
    pub score: i32,
}

/// Outcome of a recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Recommendation {
    Suggested { suggestions: Vec<ScoredDiet> },
    Blocked { reason: SafetyBlock, message: String },
}

impl Recommendation {
    fn blocked(reason: SafetyBlock) -> Self {
        Recommendation::Blocked {
            reason,
            message: reason.message().to_string(),
        }
    }

    /// Ranked suggestions; empty when blocked.
    pub fn suggestions(&self) -> &[ScoredDiet] {
        match self {
            Recommendation::Suggested { suggestions } => suggestions,
            Recommendation::Blocked { .. } => &[],
        }
    }

    /// Returns the safety block, if suggestions were withheld.
    pub fn block(&self) -> Option<SafetyBlock> {
        match self {
            Recommendation::Blocked { reason, .. } => Some(*reason),
            Recommendation::Suggested { .. } => None,
        }
    }
}

/// Inputs to a single recommendation. The goal must already be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub goal: Goal,
    pub bmi_category: Option<BmiCategory>,
    pub preferences: PreferenceSet,
}

/// Ranks catalog entries for a goal.
pub struct DietRecommender;

impl DietRecommender {
    /// Recommends using the standard affinity table.
    pub fn recommend(catalog: &DietCatalog, request: &RecommendationRequest) -> Recommendation {
        Self::recommend_with(catalog, AffinityTable::standard(), request)
    }

    /// Recommends using the given affinity table.
    ///
    /// # Algorithm
    /// 1. Safety gate: block before scoring when the goal conflicts with the BMI bucket
    /// 2. Keep only entries whose goals contain the requested goal
    /// 3. score = BASE_GOAL_SCORE + Σ(affinity[preference][entry]) over set preferences
    /// 4. Stable sort by score descending, so ties keep catalog order
    /// 5. Take the first MAX_SUGGESTIONS
    pub fn recommend_with(
        catalog: &DietCatalog,
        affinities: &AffinityTable,
        request: &RecommendationRequest,
    ) -> Recommendation {
        if let Some(block) = SafetyBlock::check(request.goal, request.bmi_category) {
            return Recommendation::blocked(block);
        }

        let mut scored: Vec<ScoredDiet> = catalog
            .for_goal(request.goal)
            .map(|entry| ScoredDiet {
                entry: entry.clone(),
                score: Self::score_entry(entry, &request.preferences, affinities),
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(MAX_SUGGESTIONS);

        Recommendation::Suggested {
            suggestions: scored,
        }
    }

    /// Score of one goal-matching entry.
    pub fn score_entry(
        entry: &DietEntry,
        preferences: &PreferenceSet,
        affinities: &AffinityTable,
    ) -> i32 {
        BASE_GOAL_SCORE + affinities.adjustment(preferences, &entry.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diet::Preference;
    use proptest::prelude::*;

    fn request(
        goal: Goal,
        bmi_category: Option<BmiCategory>,
        preferences: PreferenceSet,
    ) -> RecommendationRequest {
        RecommendationRequest {
            goal,
            bmi_category,
            preferences,
        }
    }

    fn keys(recommendation: &Recommendation) -> Vec<&str> {
        recommendation
            .suggestions()
            .iter()
            .map(|s| s.entry.key.as_str())
            .collect()
    }

    fn scores(recommendation: &Recommendation) -> Vec<i32> {
        recommendation.suggestions().iter().map(|s| s.score).collect()
    }

    // Safety Gate Tests

    #[test]
    fn gate_blocks_weight_loss_for_underweight_family() {
        for category in [BmiCategory::SeverelyUnderweight, BmiCategory::Underweight] {
            assert_eq!(
                SafetyBlock::check(Goal::WeightLoss, Some(category)),
                Some(SafetyBlock::WeightLossWhileUnderweight)
            );
        }
    }

    #[test]
    fn gate_blocks_weight_gain_for_overweight_family() {
        for category in [
            BmiCategory::Overweight,
            BmiCategory::ObesityI,
            BmiCategory::ObesityII,
            BmiCategory::ObesityIII,
        ] {
            assert_eq!(
                SafetyBlock::check(Goal::WeightGain, Some(category)),
                Some(SafetyBlock::WeightGainWhileOverweight)
            );
        }
    }

    #[test]
    fn gate_allows_goals_aligned_with_bmi() {
        assert_eq!(SafetyBlock::check(Goal::WeightGain, Some(BmiCategory::Underweight)), None);
        assert_eq!(SafetyBlock::check(Goal::WeightLoss, Some(BmiCategory::ObesityIII)), None);
        assert_eq!(SafetyBlock::check(Goal::WeightLoss, Some(BmiCategory::Normal)), None);
        assert_eq!(SafetyBlock::check(Goal::WeightGain, Some(BmiCategory::Normal)), None);
    }

    #[test]
    fn gate_never_blocks_without_bmi() {
        for goal in Goal::all() {
            assert_eq!(SafetyBlock::check(*goal, None), None);
        }
    }

    #[test]
    fn gate_never_blocks_non_weight_goals() {
        for category in [BmiCategory::SeverelyUnderweight, BmiCategory::ObesityIII] {
            assert_eq!(SafetyBlock::check(Goal::ImproveHealth, Some(category)), None);
            assert_eq!(SafetyBlock::check(Goal::BetterPhysique, Some(category)), None);
        }
    }

    #[test]
    fn blocked_recommendation_carries_message_and_no_suggestions() {
        let result = DietRecommender::recommend(
            DietCatalog::builtin(),
            &request(Goal::WeightLoss, Some(BmiCategory::Underweight), PreferenceSet::default()),
        );

        assert!(result.suggestions().is_empty());
        assert_eq!(result.block(), Some(SafetyBlock::WeightLossWhileUnderweight));
        match result {
            Recommendation::Blocked { message, .. } => {
                assert!(message.contains("not appropriate"));
                assert!(message.starts_with("Weight-loss"));
            }
            _ => panic!("Expected Blocked"),
        }
    }

    #[test]
    fn obesity_with_weight_gain_is_blocked() {
        let result = DietRecommender::recommend(
            DietCatalog::builtin(),
            &request(Goal::WeightGain, Some(BmiCategory::ObesityII), PreferenceSet::default()),
        );

        assert_eq!(result.block(), Some(SafetyBlock::WeightGainWhileOverweight));
        assert!(result.suggestions().is_empty());
    }

    // Scoring Tests

    #[test]
    fn no_preferences_keeps_catalog_order() {
        let result = DietRecommender::recommend(
            DietCatalog::builtin(),
            &request(Goal::WeightLoss, Some(BmiCategory::Normal), PreferenceSet::default()),
        );

        assert_eq!(keys(&result), vec!["mediterranean", "high_protein", "ketogenic"]);
        assert_eq!(scores(&result), vec![5, 5, 5]);
    }

    #[test]
    fn vegetarian_lifts_plant_forward_entries() {
        let prefs = PreferenceSet::default().with(Preference::Vegetarian);
        let result = DietRecommender::recommend(
            DietCatalog::builtin(),
            &request(Goal::WeightLoss, Some(BmiCategory::Normal), prefs),
        );

        assert_eq!(keys(&result), vec!["mediterranean", "plant_based", "high_protein"]);
        assert_eq!(scores(&result), vec![7, 7, 5]);
    }

    #[test]
    fn vegetarian_mediterranean_outranks_keto() {
        let builtin = DietCatalog::builtin();
        // Keto declared first so only the score can put mediterranean ahead.
        let catalog = DietCatalog::new(vec![
            builtin.get("ketogenic").unwrap().clone(),
            builtin.get("mediterranean").unwrap().clone(),
        ]);
        let prefs = PreferenceSet::default().with(Preference::Vegetarian);

        let result = DietRecommender::recommend(
            &catalog,
            &request(Goal::WeightLoss, Some(BmiCategory::Normal), prefs),
        );

        assert_eq!(keys(&result), vec!["mediterranean", "ketogenic"]);
        assert_eq!(scores(&result), vec![7, 5]);
    }

    #[test]
    fn sweet_tooth_penalises_ketogenic() {
        let catalog = DietCatalog::builtin();
        let prefs = PreferenceSet::default().with(Preference::Sweet);
        let keto = catalog.get("ketogenic").unwrap();

        assert_eq!(
            DietRecommender::score_entry(keto, &prefs, AffinityTable::standard()),
            4
        );

        let result = DietRecommender::recommend(
            catalog,
            &request(Goal::WeightLoss, None, prefs),
        );
        assert_eq!(keys(&result), vec!["mediterranean", "zone", "high_protein"]);
        assert_eq!(scores(&result), vec![6, 6, 5]);
    }

    #[test]
    fn variety_penalises_rigid_entries() {
        let prefs = PreferenceSet::default().with(Preference::Variety);
        let result = DietRecommender::recommend(
            DietCatalog::builtin(),
            &request(Goal::BetterPhysique, None, prefs),
        );

        // high_protein 5, paleo 5, clean_eating 4, bulking 5
        assert_eq!(keys(&result), vec!["high_protein", "paleo", "bulking"]);
        assert_eq!(scores(&result), vec![5, 5, 5]);
    }

    #[test]
    fn stacked_preferences_accumulate() {
        let prefs = PreferenceSet::default()
            .with(Preference::Hearty)
            .with(Preference::Meat);
        let result = DietRecommender::recommend(
            DietCatalog::builtin(),
            &request(Goal::WeightGain, Some(BmiCategory::Underweight), prefs),
        );

        assert_eq!(keys(&result), vec!["bulking", "mass_gainer", "high_carb"]);
        assert_eq!(scores(&result), vec![9, 7, 5]);
    }

    #[test]
    fn fewer_matches_than_limit_returns_all_matches() {
        let catalog = DietCatalog::new(vec![DietCatalog::builtin()
            .get("dash")
            .unwrap()
            .clone()]);
        let result = DietRecommender::recommend(
            &catalog,
            &request(Goal::ImproveHealth, None, PreferenceSet::default()),
        );
        assert_eq!(keys(&result), vec!["dash"]);
    }

    #[test]
    fn no_matching_entries_is_empty_suggestion_list() {
        let catalog = DietCatalog::new(vec![DietCatalog::builtin()
            .get("dash")
            .unwrap()
            .clone()]);
        let result = DietRecommender::recommend(
            &catalog,
            &request(Goal::WeightGain, None, PreferenceSet::default()),
        );
        assert_eq!(result, Recommendation::Suggested { suggestions: vec![] });
    }

    #[test]
    fn custom_affinity_table_is_honoured() {
        let table = AffinityTable::from_rows([(Preference::Fuel, "high_carb", 10)]);
        let prefs = PreferenceSet::default().with(Preference::Fuel);
        let result = DietRecommender::recommend_with(
            DietCatalog::builtin(),
            &table,
            &request(Goal::WeightGain, None, prefs),
        );
        assert_eq!(keys(&result)[0], "high_carb");
    }

    #[test]
    fn suggestions_serialize_flat_with_score() {
        let result = DietRecommender::recommend(
            DietCatalog::builtin(),
            &request(Goal::WeightGain, None, PreferenceSet::default()),
        );
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["status"], "suggested");
        assert_eq!(json["suggestions"][0]["key"], "bulking");
        assert_eq!(json["suggestions"][0]["score"], 5);
        assert_eq!(json["suggestions"][0]["goals"][0], "weight_gain");
    }

    #[test]
    fn blocked_serializes_reason_and_message() {
        let result = DietRecommender::recommend(
            DietCatalog::builtin(),
            &request(Goal::WeightGain, Some(BmiCategory::Overweight), PreferenceSet::default()),
        );
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["status"], "blocked");
        assert_eq!(json["reason"], "weight_gain_while_overweight");
        assert!(json["message"].as_str().unwrap().contains("not appropriate"));
    }

    // Property Tests

    fn goal_strategy() -> impl Strategy<Value = Goal> {
        prop::sample::select(Goal::all().to_vec())
    }

    fn category_strategy() -> impl Strategy<Value = Option<BmiCategory>> {
        prop::option::of(prop::sample::select(vec![
            BmiCategory::SeverelyUnderweight,
            BmiCategory::Underweight,
            BmiCategory::Normal,
            BmiCategory::Overweight,
            BmiCategory::ObesityI,
            BmiCategory::ObesityII,
            BmiCategory::ObesityIII,
        ]))
    }

    fn preferences_strategy() -> impl Strategy<Value = PreferenceSet> {
        any::<[bool; 8]>().prop_map(|flags| {
            Preference::all()
                .iter()
                .zip(flags)
                .filter(|(_, on)| *on)
                .map(|(preference, _)| *preference)
                .collect()
        })
    }

    proptest! {
        #[test]
        fn suggestions_always_match_goal_and_respect_limit(
            goal in goal_strategy(),
            category in category_strategy(),
            prefs in preferences_strategy(),
        ) {
            let result = DietRecommender::recommend(
                DietCatalog::builtin(),
                &request(goal, category, prefs),
            );

            prop_assert!(result.suggestions().len() <= MAX_SUGGESTIONS);
            for suggestion in result.suggestions() {
                prop_assert!(suggestion.entry.supports(goal));
            }
        }

        #[test]
        fn suggestions_are_sorted_by_score(
            goal in goal_strategy(),
            prefs in preferences_strategy(),
        ) {
            let result = DietRecommender::recommend(
                DietCatalog::builtin(),
                &request(goal, None, prefs),
            );
            let scores = scores(&result);
            prop_assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
        }

        #[test]
        fn recommendation_is_deterministic(
            goal in goal_strategy(),
            category in category_strategy(),
            prefs in preferences_strategy(),
        ) {
            let req = request(goal, category, prefs);
            let first = DietRecommender::recommend(DietCatalog::builtin(), &req);
            let second = DietRecommender::recommend(DietCatalog::builtin(), &req);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn underweight_weight_loss_always_blocked(prefs in preferences_strategy()) {
            let result = DietRecommender::recommend(
                DietCatalog::builtin(),
                &request(Goal::WeightLoss, Some(BmiCategory::Underweight), prefs),
            );
            prop_assert_eq!(result.block(), Some(SafetyBlock::WeightLossWhileUnderweight));
            prop_assert!(result.suggestions().is_empty());
        }

        #[test]
        fn obesity_weight_gain_always_blocked(prefs in preferences_strategy()) {
            let result = DietRecommender::recommend(
                DietCatalog::builtin(),
                &request(Goal::WeightGain, Some(BmiCategory::ObesityII), prefs),
            );
            prop_assert_eq!(result.block(), Some(SafetyBlock::WeightGainWhileOverweight));
            prop_assert!(result.suggestions().is_empty());
        }
    }
}
