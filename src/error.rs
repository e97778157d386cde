//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced to callers of the scheduling engine.
///
/// None of these are transient: the engine is deterministic, so retrying
/// the same call yields the same error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The process list failed validation; nothing was simulated.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// A generator or report configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A scheduling mode name was not recognized.
    #[error("unknown scheduling mode: {0}")]
    UnknownMode(String),
}

impl ScheduleError {
    /// Validation errors carried by an `InvalidInput` error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            ScheduleError::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
