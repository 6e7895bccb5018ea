//! Error types.
//!
//! "No free slot" is not an error: allocation returns `None` and the
//! planner simply moves on. Errors here cover misuse of the session and
//! broken configuration.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by configuration loading and the session layer.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("no patients to schedule")]
    NoPatients,

    #[error("invalid configuration: {}", join(.0))]
    InvalidConfig(Vec<ValidationError>),

    #[error("patient rejected: {}", join(.0))]
    InvalidPatient(Vec<ValidationError>),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
