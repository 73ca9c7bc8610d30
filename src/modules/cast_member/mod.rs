pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::use_cases::{
    CreateCastMemberHandler, DeleteCastMemberHandler, GetCastMemberByIdHandler,
    ListCastMembersHandler, UpdateCastMemberHandler,
};
pub use domain::{CastMember, CastMemberEvent, CastMemberGateway, CastMemberId, CastMemberKind};
pub use infrastructure::InMemoryCastMemberGateway;
