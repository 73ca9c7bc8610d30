pub mod create_genre;
pub mod delete_genre;
pub mod get_genre_by_id;
pub mod list_genres;
pub mod update_genre;

pub use create_genre::{CreateGenreCommand, CreateGenreHandler, CreateGenreOutput};
pub use delete_genre::{DeleteGenreCommand, DeleteGenreHandler};
pub use get_genre_by_id::{GenreOutput, GetGenreByIdHandler, GetGenreByIdQuery};
pub use list_genres::{GenreListOutput, ListGenresHandler};
pub use update_genre::{UpdateGenreCommand, UpdateGenreHandler, UpdateGenreOutput};
