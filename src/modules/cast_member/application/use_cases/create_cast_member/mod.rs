mod command;
mod handler;
mod result;

pub use command::CreateCastMemberCommand;
pub use handler::CreateCastMemberHandler;
pub use result::CreateCastMemberOutput;
