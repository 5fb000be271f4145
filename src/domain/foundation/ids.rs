//! Identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::InputError;

/// Identifier of the authenticated user, issued by the session layer.
///
/// Opaque to this crate; only used for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning error if blank.
    pub fn new(id: impl Into<String>) -> Result<Self, InputError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(InputError::empty_field("user_id"));
        }
        Ok(Self(id))
    }

}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
