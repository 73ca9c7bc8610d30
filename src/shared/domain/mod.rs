pub mod aggregate;
pub mod events;
pub mod identifier;
pub mod validation;

pub use aggregate::AggregateRoot;
pub use events::{DomainEvent, DomainEventPublisher};
pub use identifier::Identifier;
