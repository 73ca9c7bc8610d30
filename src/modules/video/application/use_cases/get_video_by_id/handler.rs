use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::domain::{Video, VideoGateway, VideoId};
use crate::shared::application::use_case::Query;
use crate::shared::errors::{DomainError, DomainResult};

use super::{query::GetVideoByIdQuery, result::VideoOutput};

/// Query handler for fetching one video by id
pub struct GetVideoByIdHandler {
    video_gateway: Arc<dyn VideoGateway>,
}

impl GetVideoByIdHandler {
    pub fn new(video_gateway: Arc<dyn VideoGateway>) -> Self {
        Self { video_gateway }
    }
}

#[async_trait]
impl Query<GetVideoByIdQuery, VideoOutput> for GetVideoByIdHandler {
    async fn execute(&self, query: GetVideoByIdQuery) -> DomainResult<VideoOutput> {
        let id = VideoId::from(query.id.as_str());
        self.video_gateway
            .find_by_id(&id)
            .await?
            .map(|video| VideoOutput::from(&video))
            .ok_or_else(|| DomainError::not_found(Video::AGGREGATE_NAME, query.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::domain::aggregate::AggregateRoot;
    use crate::modules::category::domain::CategoryId;
    use crate::modules::video::domain::gateway::MockVideoGateway;
    use crate::modules::video::domain::Rating;

    #[tokio::test]
    async fn test_get_video_by_id_returns_the_projection() {
        let existing = Video::new(
            "Young Frankenstein",
            "A 1974 horror comedy",
            1974,
            106.0,
            Rating::Age14,
            false,
            true,
            vec![CategoryId::from("cat-1")],
            Vec::new(),
            Vec::new(),
        )
        .unwrap();
        let id = existing.id().to_string();

        let mut gateway = MockVideoGateway::new();
        let found = existing.clone();
        gateway
            .expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));

        let handler = GetVideoByIdHandler::new(Arc::new(gateway));
        let output = handler.execute(GetVideoByIdQuery::new(id.as_str())).await.unwrap();

        assert_eq!(output.id, id);
        assert_eq!(output.rating, "14");
        assert_eq!(output.categories, vec!["cat-1"]);
    }

    #[tokio::test]
    async fn test_get_video_by_id_with_unknown_id_is_not_found() {
        let mut gateway = MockVideoGateway::new();
        gateway.expect_find_by_id().returning(|_| Ok(None));

        let handler = GetVideoByIdHandler::new(Arc::new(gateway));
        let error = handler
            .execute(GetVideoByIdQuery::new("missing-id"))
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "Video with ID missing-id was not found");
    }
}
