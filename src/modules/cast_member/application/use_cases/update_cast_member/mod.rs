mod command;
mod handler;
mod result;

pub use command::UpdateCastMemberCommand;
pub use handler::UpdateCastMemberHandler;
pub use result::UpdateCastMemberOutput;
