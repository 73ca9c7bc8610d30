use super::error::ValidationError;
use crate::shared::errors::{DomainError, DomainResult};

/// Polymorphic surface for collecting validation failures.
///
/// Implemented by [`Notification`](super::Notification) (accumulate every
/// failure) and [`FailFast`](super::FailFast) (bail on the first one).
/// Aggregate validation code is written against this trait so the caller
/// picks the strategy: pass a `Notification` and drive every check, or pass
/// a `FailFast` and let the first `?` short-circuit.
pub trait ValidationHandler {
    /// Record one failure. The accumulating handler always returns `Ok`;
    /// the fail-fast handler returns the error as
    /// `DomainError::Validation` so callers can propagate it with `?`.
    fn append(&mut self, error: ValidationError) -> DomainResult<()>;

    /// All failures recorded so far, in insertion order.
    fn errors(&self) -> &[ValidationError];

    /// True when at least one failure has been recorded.
    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    /// Run a single check. A `DomainError::Validation` outcome is routed
    /// through [`append`](Self::append) instead of propagating; any other
    /// failure is not a validation result and propagates unchanged.
    fn validate<F>(&mut self, check: F) -> DomainResult<()>
    where
        F: FnOnce() -> DomainResult<()>,
        Self: Sized,
    {
        match check() {
            Ok(()) => Ok(()),
            Err(DomainError::Validation(error)) => self.append(error),
            Err(other) => Err(other),
        }
    }
}
