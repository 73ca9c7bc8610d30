//! Domain events and the publication port.
//!
//! Events represent business-meaningful state changes that have occurred.
//! Aggregates buffer them while a use case runs; the persistence
//! collaborator drains and publishes them after a successful save. This
//! crate only defines the collection point and the port - delivery,
//! cross-aggregate ordering and retry live behind the port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::shared::errors::DomainResult;

/// Base contract for all domain events.
pub trait DomainEvent: Send + Sync {
    /// Type of event (for serialization/routing)
    fn event_type(&self) -> &'static str;

    /// When the event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Identifier of the aggregate the event belongs to
    fn aggregate_id(&self) -> &str;
}

/// Port for publishing drained domain events after persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainEventPublisher: Send + Sync {
    async fn publish_all(&self, events: Vec<Box<dyn DomainEvent>>) -> DomainResult<()>;
}

/// Erase a drained event buffer for publication.
pub fn boxed<E>(events: Vec<E>) -> Vec<Box<dyn DomainEvent>>
where
    E: DomainEvent + 'static,
{
    events
        .into_iter()
        .map(|event| Box::new(event) as Box<dyn DomainEvent>)
        .collect()
}
