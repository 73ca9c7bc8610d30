mod handler;
mod result;

pub use handler::ListCastMembersHandler;
pub use result::CastMemberListOutput;
