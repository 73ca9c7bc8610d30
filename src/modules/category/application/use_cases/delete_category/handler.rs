use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::domain::{CategoryEvent, CategoryGateway, CategoryId};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::events::{boxed, DomainEventPublisher};
use crate::shared::errors::DomainResult;

use super::command::DeleteCategoryCommand;

/// Use case handler for deleting a category
///
/// Deleting an id that does not exist is a no-op, so the operation is
/// idempotent from the caller's point of view.
pub struct DeleteCategoryHandler {
    category_gateway: Arc<dyn CategoryGateway>,
    event_publisher: Arc<dyn DomainEventPublisher>,
}

impl DeleteCategoryHandler {
    pub fn new(
        category_gateway: Arc<dyn CategoryGateway>,
        event_publisher: Arc<dyn DomainEventPublisher>,
    ) -> Self {
        Self {
            category_gateway,
            event_publisher,
        }
    }
}

#[async_trait]
impl UseCase<DeleteCategoryCommand, ()> for DeleteCategoryHandler {
    async fn execute(&self, command: DeleteCategoryCommand) -> DomainResult<()> {
        let id = CategoryId::from(command.id);
        self.category_gateway.delete_by_id(&id).await?;
        self.event_publisher
            .publish_all(boxed(vec![CategoryEvent::deleted(&id)]))
            .await?;
        Ok(())
    }
}
