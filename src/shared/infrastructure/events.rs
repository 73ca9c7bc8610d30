use async_trait::async_trait;

use crate::shared::domain::events::{DomainEvent, DomainEventPublisher};
use crate::shared::errors::DomainResult;

/// Default event sink: records each drained event on the log facade.
///
/// Stands in wherever no real publisher (outbox, message queue) is wired.
pub struct LoggingEventPublisher;

#[async_trait]
impl DomainEventPublisher for LoggingEventPublisher {
    async fn publish_all(&self, events: Vec<Box<dyn DomainEvent>>) -> DomainResult<()> {
        for event in &events {
            log::debug!(
                "domain event {} for aggregate {} at {}",
                event.event_type(),
                event.aggregate_id(),
                event.occurred_at()
            );
        }
        Ok(())
    }
}
