use async_trait::async_trait;

use crate::shared::application::pagination::{Pagination, SearchQuery};
use crate::shared::errors::DomainResult;

use super::cast_member::{CastMember, CastMemberId};

/// Port (interface) for cast member persistence. Infrastructure provides
/// the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CastMemberGateway: Send + Sync {
    async fn create(&self, member: &CastMember) -> DomainResult<CastMember>;

    async fn update(&self, member: &CastMember) -> DomainResult<CastMember>;

    /// Must be a no-op, not an error, when the id does not exist.
    async fn delete_by_id(&self, id: &CastMemberId) -> DomainResult<()>;

    async fn find_by_id(&self, id: &CastMemberId) -> DomainResult<Option<CastMember>>;

    /// `terms` is a case-insensitive substring match on the name.
    async fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<CastMember>>;

    /// Returns the subset of `ids` that exist, preserving input order.
    async fn exists_by_ids(&self, ids: &[CastMemberId]) -> DomainResult<Vec<CastMemberId>>;
}
