pub mod category;
pub mod events;
pub mod gateway;

pub use category::{Category, CategoryId};
pub use events::CategoryEvent;
pub use gateway::CategoryGateway;
