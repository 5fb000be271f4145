//! Profile module - the user attributes recommendations are computed from.
//!
//! Profiles themselves are persisted by the surrounding application; this
//! module only interprets the goal and body-mass fields it hands over.

mod bmi;
mod goal;
mod health_profile;

pub use bmi::{Bmi, BmiBucket, BmiCategory};
pub use goal::{resolve_effective_goal, Goal, ProfileGoal, OTHER_GOAL_SELECTION};
pub use health_profile::{resolve_bmi, HealthProfile};
