use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::genre::domain::{GenreEvent, GenreGateway, GenreId};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::events::{boxed, DomainEventPublisher};
use crate::shared::errors::DomainResult;

use super::command::DeleteGenreCommand;

/// Use case handler for deleting a genre (idempotent)
pub struct DeleteGenreHandler {
    genre_gateway: Arc<dyn GenreGateway>,
    event_publisher: Arc<dyn DomainEventPublisher>,
}

impl DeleteGenreHandler {
    pub fn new(
        genre_gateway: Arc<dyn GenreGateway>,
        event_publisher: Arc<dyn DomainEventPublisher>,
    ) -> Self {
        Self {
            genre_gateway,
            event_publisher,
        }
    }
}

#[async_trait]
impl UseCase<DeleteGenreCommand, ()> for DeleteGenreHandler {
    async fn execute(&self, command: DeleteGenreCommand) -> DomainResult<()> {
        let id = GenreId::from(command.id);
        self.genre_gateway.delete_by_id(&id).await?;
        self.event_publisher
            .publish_all(boxed(vec![GenreEvent::deleted(&id)]))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::genre::domain::gateway::MockGenreGateway;
    use crate::shared::domain::events::MockDomainEventPublisher;

    #[tokio::test]
    async fn test_delete_genre_is_idempotent() {
        let mut gateway = MockGenreGateway::new();
        gateway.expect_delete_by_id().times(2).returning(|_| Ok(()));
        let mut publisher = MockDomainEventPublisher::new();
        publisher.expect_publish_all().times(2).returning(|_| Ok(()));

        let handler = DeleteGenreHandler::new(Arc::new(gateway), Arc::new(publisher));

        handler
            .execute(DeleteGenreCommand::new("some-id"))
            .await
            .unwrap();
        handler
            .execute(DeleteGenreCommand::new("some-id"))
            .await
            .unwrap();
    }
}
