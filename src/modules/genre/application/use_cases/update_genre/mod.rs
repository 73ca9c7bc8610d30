mod command;
mod handler;
mod result;

pub use command::UpdateGenreCommand;
pub use handler::UpdateGenreHandler;
pub use result::UpdateGenreOutput;
