//! Typed errors for the normalization and response boundaries.

use crate::fields::Field;

/// Raw input failed to normalize into a simulation request.
///
/// Produced before any network call; the submission is aborted and the
/// session lands in the Failed state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is not a number (got {value:?})")]
    NotANumber { field: Field, value: String },

    #[error("{field} must not be negative")]
    Negative { field: Field },

    #[error("goal_years must be a positive whole number")]
    NonPositiveYears,

    #[error("allocations must sum to 100% (got {sum_pct}%)")]
    AllocationSum { sum_pct: f64 },
}

impl ValidationError {
    /// The offending field, when the error concerns a single field.
    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        match self {
            ValidationError::NotANumber { field, .. } | ValidationError::Negative { field } => {
                Some(*field)
            }
            ValidationError::NonPositiveYears => Some(Field::GoalYears),
            ValidationError::AllocationSum { .. } => None,
        }
    }
}

/// The service answered with a success status but a body that does not
/// match the expected shape.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResponseShapeError {
    #[error("response body is not valid JSON: {detail}")]
    InvalidJson { detail: String },

    #[error("response is missing {path}")]
    Missing { path: &'static str },

    #[error("{path} must be within [0, 1] (got {value})")]
    ProbabilityOutOfRange { path: &'static str, value: f64 },

    #[error("{path} contains a non-finite value")]
    NotFinite { path: &'static str },
}
