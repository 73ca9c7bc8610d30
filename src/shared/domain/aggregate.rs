use super::events::DomainEvent;
use super::identifier::Identifier;

/// Base shape of an aggregate root: identity plus a pending-event buffer.
///
/// Two aggregates are equal iff their identifiers are equal - entities
/// implement `PartialEq` by id only, regardless of other field values.
/// Mutating operations append events to the buffer; the persistence
/// collaborator drains it with [`take_events`](Self::take_events) after a
/// successful save.
pub trait AggregateRoot {
    type Id: Identifier;
    type Event: DomainEvent;

    fn id(&self) -> &Self::Id;

    /// Events recorded since construction or the last drain.
    fn pending_events(&self) -> &[Self::Event];

    /// Drain the pending events, leaving the buffer empty.
    fn take_events(&mut self) -> Vec<Self::Event>;
}
