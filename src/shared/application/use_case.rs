use crate::shared::domain::validation::Notification;
use crate::shared::errors::DomainResult;
/// Base traits for all use cases following CQRS pattern
///
/// Two command flavors exist, chosen per operation:
///
/// - [`UseCase`] is direct-result: any domain failure (not-found, invalid
///   state) is the `Err` of the call. Used for destructive/idempotent
///   operations and simple reads where there is nothing to accumulate.
/// - [`NotificationUseCase`] is either-result: expected validation failure
///   is returned as data in the inner branch so the caller can present
///   every violation at once. The outer `Err` stays reserved for
///   not-found and infrastructure failures.
use async_trait::async_trait;

/// Inner branch of an either-result execution: the success output or the
/// notification accumulated while validating the command.
pub type NotificationResult<T> = Result<T, Notification>;

/// Base trait for direct-result use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> DomainResult<TResult>;
}

/// Base trait for either-result use cases (command handlers that
/// accumulate validation failures)
#[async_trait]
pub trait NotificationUseCase<TCommand, TResult> {
    /// Execute the use case; validation failures ride the inner branch
    async fn execute(&self, command: TCommand) -> DomainResult<NotificationResult<TResult>>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> DomainResult<TResult>;
}
