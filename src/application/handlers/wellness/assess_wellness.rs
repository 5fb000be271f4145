//! AssessWellnessHandler - Query handler for the quick wellness check.
//!
//! Likelihood estimates only; results are recomputed on every submission.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::domain::foundation::{InputError, UserId};
use crate::domain::wellness::{WellnessAggregator, WellnessReport};

/// Query carrying one wellness form submission.
#[derive(Debug, Clone)]
pub struct AssessWellnessQuery {
    /// Authenticated user, for log correlation.
    pub user_id: UserId,
    /// Flat slot name → raw value mapping from the form.
    pub answers: HashMap<String, String>,
    /// Questionnaire the user submitted, or "all".
    pub action: Option<String>,
}

/// Result of a wellness assessment.
pub type AssessWellnessResult = WellnessReport;

/// Handler for wellness assessments.
#[derive(Debug, Default)]
pub struct AssessWellnessHandler;

impl AssessWellnessHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: AssessWellnessQuery) -> Result<AssessWellnessResult, InputError> {
        match WellnessAggregator::aggregate(&query.answers, query.action.as_deref()) {
            Ok(report) => {
                info!(
                    user_id = %query.user_id,
                    completed = report.completed_count(),
                    overall_complete = report.overall_complete(),
                    selected = report.single_result().map(|r| r.domain().key()),
                    "Assessed wellness questionnaires"
                );
                Ok(report)
            }
            Err(err) => {
                warn!(
                    user_id = %query.user_id,
                    field = err.field(),
                    error = %err,
                    "Rejected wellness answers"
                );
                Err(err)
            }
        }
    }
}
