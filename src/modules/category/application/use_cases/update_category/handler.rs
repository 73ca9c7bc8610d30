use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::domain::{Category, CategoryGateway, CategoryId};
use crate::shared::application::use_case::{NotificationResult, NotificationUseCase};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::events::{boxed, DomainEventPublisher};
use crate::shared::domain::validation::{Notification, ValidationHandler};
use crate::shared::errors::{DomainError, DomainResult};

use super::{command::UpdateCategoryCommand, result::UpdateCategoryOutput};

/// Use case handler for updating an existing category
pub struct UpdateCategoryHandler {
    category_gateway: Arc<dyn CategoryGateway>,
    event_publisher: Arc<dyn DomainEventPublisher>,
}

impl UpdateCategoryHandler {
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
impl NotificationUseCase<UpdateCategoryCommand, UpdateCategoryOutput> for UpdateCategoryHandler {
    async fn execute(
        &self,
        command: UpdateCategoryCommand,
    ) -> DomainResult<NotificationResult<UpdateCategoryOutput>> {
        let id = CategoryId::from(command.id.as_str());
        let mut category = self
            .category_gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(Category::AGGREGATE_NAME, command.id))?;

        let mut notification = Notification::create();
        category.update(
            command.name,
            command.description,
            command.is_active,
            &mut notification,
        )?;

        if notification.has_errors() {
            return Ok(Err(notification));
        }

        let updated = self.category_gateway.update(&category).await?;
        self.event_publisher
            .publish_all(boxed(category.take_events()))
            .await?;

        Ok(Ok(UpdateCategoryOutput::from(&updated)))
    }
}
