//! Wellness Module - likelihood scoring for the quick wellness check.
//!
//! Ten independent five-question questionnaires, each answered on a 0-3
//! scale. Results are likelihood estimates only and are never stored;
//! they are recomputed from the submitted answers on every request.

mod aggregator;
mod questionnaire;

pub use aggregator::{DomainResult, WellnessAggregator, WellnessReport};
pub use questionnaire::{
    DomainSelector, LikertAnswer, QuestionnaireDomain, ALL_DOMAINS_SELECTOR, MAX_ANSWER,
    SLOTS_PER_DOMAIN,
};
