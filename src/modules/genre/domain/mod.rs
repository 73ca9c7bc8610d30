pub mod events;
pub mod gateway;
pub mod genre;

pub use events::GenreEvent;
pub use gateway::GenreGateway;
pub use genre::{Genre, GenreId};
