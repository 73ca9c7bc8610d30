mod command;
mod handler;
mod result;

pub use command::CreateVideoCommand;
pub use handler::CreateVideoHandler;
pub use result::CreateVideoOutput;
