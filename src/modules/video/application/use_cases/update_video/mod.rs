mod command;
mod handler;
mod result;

pub use command::UpdateVideoCommand;
pub use handler::UpdateVideoHandler;
pub use result::UpdateVideoOutput;
