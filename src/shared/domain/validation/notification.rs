use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::handler::ValidationHandler;
use crate::shared::errors::DomainResult;

/// Accumulating validation handler.
///
/// Ordered, duplicate-preserving collection of validation failures. A use
/// case creates one per invocation, runs every check against it, and
/// returns it as the failure branch when any check failed - so a single
/// request surfaces all violations at once instead of the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn create() -> Self {
        Self::default()
    }

    /// Absorb another handler's failures, preserving their order.
    pub fn merge(&mut self, other: Notification) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Messages of every recorded failure, in insertion order.
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|error| error.message().to_string())
            .collect()
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        self.errors.push(error);
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|error| error.message()).collect();
        write!(f, "{}", messages.join(", "))
    }
}
