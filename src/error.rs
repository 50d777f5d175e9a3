use thiserror::Error;

use crate::models::ProfileKind;

/// Errors raised by the profile store, the loader and the matching engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// A profile or payload violates the record invariants
    #[error("Validation error: {0}")]
    Validation(String),

    /// The run cannot proceed with the given configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("No {kind} with id '{id}'")]
    ProfileNotFound { kind: ProfileKind, id: String },
}

impl From<validator::ValidationErrors> for MatchError {
    fn from(errors: validator::ValidationErrors) -> Self {
        MatchError::Validation(errors.to_string())
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        MatchError::Validation(format!("malformed profile payload: {}", err))
    }
}
