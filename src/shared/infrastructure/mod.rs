pub mod events;

pub use events::LoggingEventPublisher;
