pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::use_cases::{
    CreateGenreHandler, DeleteGenreHandler, GetGenreByIdHandler, ListGenresHandler,
    UpdateGenreHandler,
};
pub use domain::{Genre, GenreEvent, GenreGateway, GenreId};
pub use infrastructure::InMemoryGenreGateway;
