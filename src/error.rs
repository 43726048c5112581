//! Error types for schedule validation and saving.

use serde::Serialize;

use crate::models::Field;

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The field was left blank.
    #[error("value is required")]
    Empty,

    /// The text does not match the lexical pattern.
    #[error("expected format {expected}")]
    Format {
        /// Human-readable pattern, e.g. `YYYY-MM-DD`.
        expected: &'static str,
    },

    /// The text is well-formed but names no real date.
    #[error("{0} is not a calendar date")]
    Calendar(String),

    /// The value is valid on its own but precedes the field it must follow.
    #[error("must be after {other}")]
    OutOfOrder {
        /// The field this one is compared against.
        other: Field,
    },
}

/// A validation failure attached to the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {error}")]
pub struct FieldError {
    pub field: Field,
    pub error: ValidationError,
}

impl FieldError {
    pub fn new(field: Field, error: ValidationError) -> Self {
        Self { field, error }
    }
}

/// Wire form of a `FieldError`.
#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorBody {
    pub field: Field,
    pub message: String,
}

impl From<&FieldError> for FieldErrorBody {
    fn from(e: &FieldError) -> Self {
        Self {
            field: e.field,
            message: e.error.to_string(),
        }
    }
}

/// Returned by a validated save; the store keeps its previous value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("schedule rejected: {}", summarize(.0))]
    Invalid(Vec<FieldError>),
}

impl SaveError {
    pub fn fields(&self) -> &[FieldError] {
        match self {
            SaveError::Invalid(errors) => errors,
        }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
