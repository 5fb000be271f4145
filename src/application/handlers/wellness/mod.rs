//! Wellness query handlers.

mod assess_wellness;

pub use assess_wellness::{AssessWellnessHandler, AssessWellnessQuery, AssessWellnessResult};
