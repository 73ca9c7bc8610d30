use super::error::ValidationError;
use super::handler::ValidationHandler;
use crate::shared::errors::{DomainError, DomainResult};

/// Fail-fast validation handler.
///
/// The first appended error is returned as `DomainError::Validation`, so a
/// factory written as `entity.validate(&mut FailFast::new())?` refuses to
/// yield an instance on the first violated invariant. Satisfies the same
/// contract as `Notification`, which lets aggregate code stay agnostic to
/// the strategy the caller wants.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailFast;

impl FailFast {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationHandler for FailFast {
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        Err(DomainError::Validation(error))
    }

    fn errors(&self) -> &[ValidationError] {
        // Nothing is retained: the first error leaves through `append`.
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_bails_with_the_first_error() {
        let mut handler = FailFast::new();
        let result = handler.append(ValidationError::new("'name' should not be empty"));

        match result {
            Err(DomainError::Validation(error)) => {
                assert_eq!(error.message(), "'name' should not be empty");
            }
            other => panic!("expected validation failure, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn test_validate_short_circuits_on_first_failing_check() {
        let mut handler = FailFast::new();
        let outcome: DomainResult<()> = (|| {
            handler.validate(|| Err(DomainError::validation("first")))?;
            handler.validate(|| Err(DomainError::validation("second")))?;
            Ok(())
        })();

        match outcome {
            Err(DomainError::Validation(error)) => assert_eq!(error.message(), "first"),
            other => panic!("expected validation failure, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn test_has_errors_stays_false() {
        let handler = FailFast::new();
        assert!(!handler.has_errors());
    }
}
