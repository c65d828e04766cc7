use serde::Serialize;
use thiserror::Error;

/// Why a candidate value was rejected.
///
/// Failures are values handed back to the caller for user-facing feedback;
/// validation never panics or aborts.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "detail", rename_all = "snake_case")]
pub enum ValidationFailure {
    #[error("A value is required")]
    MissingValue,

    #[error("Must be at least {min} characters long (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Must be at most {max} characters long (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Does not match the pattern {pattern}")]
    PatternMismatch { pattern: String },

    /// Message returned by a custom rule, reported verbatim.
    #[error("{0}")]
    CustomFailure(String),

    #[error("'{0}' is not one of the available options")]
    UnknownOption(String),

    #[error("Expected a {expected} value")]
    TypeMismatch { expected: &'static str },
}
