//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors caused by caller input.
///
/// Every variant is recoverable: the caller re-renders its form with the
/// message attached to [`InputError::field`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("A goal is required before diet approaches can be suggested")]
    MissingGoal,

    #[error("'{0}' is not a recognised goal")]
    UnknownGoal(String),

    #[error("'{0}' is not a recognised questionnaire")]
    UnknownDomain(String),

    #[error("Answer '{slot}' must be a whole number, got '{value}'")]
    MalformedAnswer { slot: String, value: String },

    #[error("Answer '{slot}' must be between {min} and {max}, got {actual}")]
    AnswerOutOfRange {
        slot: String,
        min: u8,
        max: u8,
        actual: i64,
    },

    #[error("Field '{field}' must be a positive number, got {value}")]
    InvalidMeasurement { field: String, value: f64 },

    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },
}

impl InputError {
    /// Creates a malformed answer error.
    pub fn malformed_answer(slot: impl Into<String>, value: impl Into<String>) -> Self {
        InputError::MalformedAnswer {
            slot: slot.into(),
            value: value.into(),
        }
    }

    /// Creates an out of range answer error.
    pub fn answer_out_of_range(slot: impl Into<String>, min: u8, max: u8, actual: i64) -> Self {
        InputError::AnswerOutOfRange {
            slot: slot.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid measurement error.
    pub fn invalid_measurement(field: impl Into<String>, value: f64) -> Self {
        InputError::InvalidMeasurement {
            field: field.into(),
            value,
        }
    }

    /// Creates an empty field error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        InputError::EmptyField {
            field: field.into(),
        }
    }

    /// Name of the form field the caller should highlight.
    pub fn field(&self) -> &str {
        match self {
            InputError::MissingGoal => "goal",
            InputError::UnknownGoal(_) => "goal_override",
            InputError::UnknownDomain(_) => "action",
            InputError::MalformedAnswer { slot, .. } => slot,
            InputError::AnswerOutOfRange { slot, .. } => slot,
            InputError::InvalidMeasurement { field, .. } => field,
            InputError::EmptyField { field } => field,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            InputError::MissingGoal => ErrorCode::MissingGoal,
            InputError::UnknownGoal(_) => ErrorCode::UnknownGoal,
            InputError::UnknownDomain(_) => ErrorCode::UnknownDomain,
            InputError::MalformedAnswer { .. } => ErrorCode::MalformedAnswer,
            InputError::AnswerOutOfRange { .. } => ErrorCode::OutOfRange,
            InputError::InvalidMeasurement { .. } => ErrorCode::InvalidMeasurement,
            InputError::EmptyField { .. } => ErrorCode::EmptyField,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    MissingGoal,
    UnknownGoal,
    UnknownDomain,
    MalformedAnswer,
    OutOfRange,
    InvalidMeasurement,
    EmptyField,

    // Authorization errors
    Unauthorized,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MissingGoal => "MISSING_GOAL",
            ErrorCode::UnknownGoal => "UNKNOWN_GOAL",
            ErrorCode::UnknownDomain => "UNKNOWN_DOMAIN",
            ErrorCode::MalformedAnswer => "MALFORMED_ANSWER",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidMeasurement => "INVALID_MEASUREMENT",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
        };
        write!(f, "{}", s)
    }
}
