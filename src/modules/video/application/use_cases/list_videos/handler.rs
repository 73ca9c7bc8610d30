use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::domain::VideoGateway;
use crate::shared::application::pagination::{Pagination, SearchQuery};
use crate::shared::application::use_case::Query;
use crate::shared::errors::DomainResult;

use super::result::VideoListOutput;

/// Query handler for listing videos
pub struct ListVideosHandler {
    video_gateway: Arc<dyn VideoGateway>,
}

impl ListVideosHandler {
    pub fn new(video_gateway: Arc<dyn VideoGateway>) -> Self {
        Self { video_gateway }
    }
}

#[async_trait]
impl Query<SearchQuery, Pagination<VideoListOutput>> for ListVideosHandler {
    async fn execute(&self, query: SearchQuery) -> DomainResult<Pagination<VideoListOutput>> {
        Ok(self
            .video_gateway
            .find_all(&query)
            .await?
            .map(|video| VideoListOutput::from(&video)))
    }
}
