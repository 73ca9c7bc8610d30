use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::domain::{VideoEvent, VideoGateway, VideoId};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::events::{boxed, DomainEventPublisher};
use crate::shared::errors::DomainResult;

use super::command::DeleteVideoCommand;

/// Use case handler for deleting a video (idempotent)
pub struct DeleteVideoHandler {
    video_gateway: Arc<dyn VideoGateway>,
    event_publisher: Arc<dyn DomainEventPublisher>,
}

impl DeleteVideoHandler {
    pub fn new(
        video_gateway: Arc<dyn VideoGateway>,
        event_publisher: Arc<dyn DomainEventPublisher>,
    ) -> Self {
        Self {
            video_gateway,
            event_publisher,
        }
    }
}

#[async_trait]
impl UseCase<DeleteVideoCommand, ()> for DeleteVideoHandler {
    async fn execute(&self, command: DeleteVideoCommand) -> DomainResult<()> {
        let id = VideoId::from(command.id);
        self.video_gateway.delete_by_id(&id).await?;
        self.event_publisher
            .publish_all(boxed(vec![VideoEvent::deleted(&id)]))
            .await?;
        Ok(())
    }
}
