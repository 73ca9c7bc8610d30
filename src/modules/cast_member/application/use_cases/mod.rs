pub mod create_cast_member;
pub mod delete_cast_member;
pub mod get_cast_member_by_id;
pub mod list_cast_members;
pub mod update_cast_member;

pub use create_cast_member::{
    CreateCastMemberCommand, CreateCastMemberHandler, CreateCastMemberOutput,
};
pub use delete_cast_member::{DeleteCastMemberCommand, DeleteCastMemberHandler};
pub use get_cast_member_by_id::{
    CastMemberOutput, GetCastMemberByIdHandler, GetCastMemberByIdQuery,
};
pub use list_cast_members::{CastMemberListOutput, ListCastMembersHandler};
pub use update_cast_member::{
    UpdateCastMemberCommand, UpdateCastMemberHandler, UpdateCastMemberOutput,
};
