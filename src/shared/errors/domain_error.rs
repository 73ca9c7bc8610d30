use thiserror::Error;

use crate::shared::domain::validation::ValidationError;

/// Failure taxonomy for every use-case and gateway call.
///
/// Accumulated validation failures never travel through this type - they are
/// returned as a `Notification` on the either-result branch. `DomainError`
/// carries the fail-fast signals: a single integrity violation, a missing
/// aggregate, or an unclassified gateway failure.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{0}")]
    Validation(ValidationError),

    #[error("{aggregate} with ID {id} was not found")]
    NotFound { aggregate: &'static str, id: String },

    #[error("Gateway error: {0}")]
    Infrastructure(#[from] anyhow::Error),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(ValidationError::new(message))
    }

    pub fn not_found(aggregate: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound {
            aggregate,
            id: id.into(),
        }
    }
}

// Result type alias for convenience
pub type DomainResult<T> = Result<T, DomainError>;
