use async_trait::async_trait;

use crate::shared::application::pagination::{Pagination, SearchQuery};
use crate::shared::errors::DomainResult;

use super::video::{Video, VideoId};

/// Port (interface) for video persistence. Infrastructure provides the
/// implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoGateway: Send + Sync {
    async fn create(&self, video: &Video) -> DomainResult<Video>;

    async fn update(&self, video: &Video) -> DomainResult<Video>;

    /// Must be a no-op, not an error, when the id does not exist.
    async fn delete_by_id(&self, id: &VideoId) -> DomainResult<()>;

    async fn find_by_id(&self, id: &VideoId) -> DomainResult<Option<Video>>;

    /// `terms` is a case-insensitive substring match on the title.
    async fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<Video>>;
}
