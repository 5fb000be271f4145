//! Goal types and effective-goal resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::InputError;

/// Form value for the "Other" goal choice on the profile form.
pub const OTHER_GOAL_SELECTION: &str = "Other";

/// The closed set of goals that diet approaches are matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    WeightGain,
    ImproveHealth,
    BetterPhysique,
}

impl Goal {
    /// Returns all goals in canonical order.
    pub fn all() -> &'static [Goal] {
        &[
            Goal::WeightLoss,
            Goal::WeightGain,
            Goal::ImproveHealth,
            Goal::BetterPhysique,
        ]
    }

    /// Returns the snake_case key used in catalog files and query strings.
    pub fn key(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::WeightGain => "weight_gain",
            Goal::ImproveHealth => "improve_health",
            Goal::BetterPhysique => "better_physique",
        }
    }

    /// Returns the label stored on user profiles.
    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight loss",
            Goal::WeightGain => "Weight gain",
            Goal::ImproveHealth => "Improve overall health/fitness",
            Goal::BetterPhysique => "Building a better physique",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Goal {
    type Err = InputError;

    /// Accepts exactly a goal's label or key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Goal::all()
            .iter()
            .find(|goal| goal.label() == s || goal.key() == s)
            .copied()
            .ok_or_else(|| InputError::UnknownGoal(s.to_string()))
    }
}

/// A goal as stored on a user profile.
///
/// Users who pick "Other" store free text, which never matches a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ProfileGoal {
    Standard(Goal),
    Custom(String),
}

impl ProfileGoal {
    /// Parses a stored goal string. Blank input means no goal.
    pub fn parse(stored: &str) -> Option<Self> {
        let trimmed = stored.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(match trimmed.parse::<Goal>() {
            Ok(goal) => ProfileGoal::Standard(goal),
            Err(_) => ProfileGoal::Custom(trimmed.to_string()),
        })
    }

    /// Builds the goal from the profile form's selection and "Other" text box.
    ///
    /// When "Other" is chosen but the text box is blank, the selection itself
    /// is kept as the goal text.
    pub fn from_form(selection: &str, other: Option<&str>) -> Option<Self> {
        if selection.trim() == OTHER_GOAL_SELECTION {
            if let Some(text) = other.filter(|t| !t.trim().is_empty()) {
                return Self::parse(text);
            }
        }
        Self::parse(selection)
    }

    /// Returns the closed goal, if this is one.
    pub fn as_goal(&self) -> Option<Goal> {
        match self {
            ProfileGoal::Standard(goal) => Some(*goal),
            ProfileGoal::Custom(_) => None,
        }
    }
}

/// Decides which goal a recommendation is computed for.
///
/// A closed profile goal always wins. Otherwise the one-shot override must
/// name a closed goal.
///
/// # Errors
/// - `UnknownGoal` when the override is not a closed goal
/// - `MissingGoal` when there is neither a usable profile goal nor an override
pub fn resolve_effective_goal(
    profile_goal: Option<&ProfileGoal>,
    goal_override: Option<&str>,
) -> Result<Goal, InputError> {
    if let Some(goal) = profile_goal.and_then(ProfileGoal::as_goal) {
        return Ok(goal);
    }

    match goal_override.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw.parse(),
        None => Err(InputError::MissingGoal),
    }
}
