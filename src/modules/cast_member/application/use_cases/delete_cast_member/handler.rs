use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::domain::{CastMemberEvent, CastMemberGateway, CastMemberId};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::events::{boxed, DomainEventPublisher};
use crate::shared::errors::DomainResult;

use super::command::DeleteCastMemberCommand;

/// Use case handler for deleting a cast member (idempotent)
pub struct DeleteCastMemberHandler {
    cast_member_gateway: Arc<dyn CastMemberGateway>,
    event_publisher: Arc<dyn DomainEventPublisher>,
}

impl DeleteCastMemberHandler {
    pub fn new(
        cast_member_gateway: Arc<dyn CastMemberGateway>,
        event_publisher: Arc<dyn DomainEventPublisher>,
    ) -> Self {
        Self {
            cast_member_gateway,
            event_publisher,
        }
    }
}

#[async_trait]
impl UseCase<DeleteCastMemberCommand, ()> for DeleteCastMemberHandler {
    async fn execute(&self, command: DeleteCastMemberCommand) -> DomainResult<()> {
        let id = CastMemberId::from(command.id);
        self.cast_member_gateway.delete_by_id(&id).await?;
        self.event_publisher
            .publish_all(boxed(vec![CastMemberEvent::deleted(&id)]))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cast_member::domain::gateway::MockCastMemberGateway;
    use crate::shared::domain::events::MockDomainEventPublisher;

    #[tokio::test]
    async fn test_delete_cast_member_is_idempotent() {
        let mut gateway = MockCastMemberGateway::new();
        gateway.expect_delete_by_id().times(2).returning(|_| Ok(()));
        let mut publisher = MockDomainEventPublisher::new();
        publisher.expect_publish_all().times(2).returning(|_| Ok(()));

        let handler = DeleteCastMemberHandler::new(Arc::new(gateway), Arc::new(publisher));

        handler
            .execute(DeleteCastMemberCommand::new("some-id"))
            .await
            .unwrap();
        handler
            .execute(DeleteCastMemberCommand::new("some-id"))
            .await
            .unwrap();
    }
}
