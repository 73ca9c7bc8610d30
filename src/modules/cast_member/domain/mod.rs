pub mod cast_member;
pub mod events;
pub mod gateway;

pub use cast_member::{CastMember, CastMemberId, CastMemberKind};
pub use events::CastMemberEvent;
pub use gateway::CastMemberGateway;
