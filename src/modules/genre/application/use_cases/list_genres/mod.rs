mod handler;
mod result;

pub use handler::ListGenresHandler;
pub use result::GenreListOutput;
