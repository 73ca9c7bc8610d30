use async_trait::async_trait;

use crate::shared::application::pagination::{Pagination, SearchQuery};
use crate::shared::errors::DomainResult;

use super::category::{Category, CategoryId};

/// Port (interface) for category persistence following Hexagonal Architecture
/// This is a domain/application layer interface - infrastructure provides the
/// implementation. No storage technology is assumed behind it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    async fn create(&self, category: &Category) -> DomainResult<Category>;

    async fn update(&self, category: &Category) -> DomainResult<Category>;

    /// Must be a no-op, not an error, when the id does not exist.
    async fn delete_by_id(&self, id: &CategoryId) -> DomainResult<()>;

    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>>;

    /// Filtering, sorting and counting are storage concerns; `terms` is a
    /// case-insensitive substring match on the name.
    async fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<Category>>;

    /// Returns the subset of `ids` that exist, preserving input order.
    async fn exists_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<CategoryId>>;
}
