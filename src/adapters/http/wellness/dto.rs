//! HTTP DTOs for wellness endpoints.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::application::handlers::AssessWellnessQuery;
use crate::domain::foundation::{InputError, UserId};
use crate::domain::wellness::QuestionnaireDomain;

pub use crate::application::handlers::AssessWellnessResult;

/// Request body for a wellness assessment.
///
/// Answers may arrive as strings (form posts) or numbers (JSON clients);
/// `null` means unanswered. Keys that are not slot names are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssessmentRequestDto {
    pub answers: HashMap<String, Value>,
    pub action: Option<String>,
}

impl AssessmentRequestDto {
    /// Flattens the answers into raw slot strings.
    ///
    /// # Errors
    /// - `MalformedAnswer` for booleans, arrays or objects in a slot
    pub fn into_query(self, user_id: UserId) -> Result<AssessWellnessQuery, InputError> {
        let mut answers = HashMap::with_capacity(self.answers.len());
        for (slot, value) in self.answers {
            if QuestionnaireDomain::for_slot(&slot).is_none() {
                continue;
            }
            let raw = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                other => return Err(InputError::malformed_answer(slot, other.to_string())),
            };
            answers.insert(slot, raw);
        }

        Ok(AssessWellnessQuery {
            user_id,
            answers,
            action: self.action,
        })
    }
}
