use async_trait::async_trait;

use crate::shared::application::pagination::{Pagination, SearchQuery};
use crate::shared::errors::DomainResult;

use super::genre::{Genre, GenreId};

/// Port (interface) for genre persistence. Infrastructure provides the
/// implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreGateway: Send + Sync {
    async fn create(&self, genre: &Genre) -> DomainResult<Genre>;

    async fn update(&self, genre: &Genre) -> DomainResult<Genre>;

    /// Must be a no-op, not an error, when the id does not exist.
    async fn delete_by_id(&self, id: &GenreId) -> DomainResult<()>;

    async fn find_by_id(&self, id: &GenreId) -> DomainResult<Option<Genre>>;

    /// `terms` is a case-insensitive substring match on the name.
    async fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<Genre>>;

    /// Returns the subset of `ids` that exist, preserving input order.
    async fn exists_by_ids(&self, ids: &[GenreId]) -> DomainResult<Vec<GenreId>>;
}
