use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::domain::{Category, CategoryGateway};
use crate::shared::application::use_case::{NotificationResult, NotificationUseCase};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::events::{boxed, DomainEventPublisher};
use crate::shared::domain::validation::{Notification, ValidationHandler};
use crate::shared::errors::DomainResult;

use super::{command::CreateCategoryCommand, result::CreateCategoryOutput};

/// Use case handler for creating a new category
pub struct CreateCategoryHandler {
    category_gateway: Arc<dyn CategoryGateway>,
    event_publisher: Arc<dyn DomainEventPublisher>,
}

impl CreateCategoryHandler {
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
impl NotificationUseCase<CreateCategoryCommand, CreateCategoryOutput> for CreateCategoryHandler {
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> DomainResult<NotificationResult<CreateCategoryOutput>> {
        let mut notification = Notification::create();
        let mut category = Category::new_with(
            command.name,
            command.description,
            command.is_active,
            &mut notification,
        )?;

        if notification.has_errors() {
            return Ok(Err(notification));
        }

        let created = self.category_gateway.create(&category).await?;
        self.event_publisher
            .publish_all(boxed(category.take_events()))
            .await?;

        Ok(Ok(CreateCategoryOutput::from(&created)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::domain::gateway::MockCategoryGateway;
    use crate::shared::domain::events::MockDomainEventPublisher;

    fn publisher_ok() -> Arc<MockDomainEventPublisher> {
        let mut publisher = MockDomainEventPublisher::new();
        publisher.expect_publish_all().returning(|_| Ok(()));
        Arc::new(publisher)
    }

    #[tokio::test]
    async fn test_create_category_with_valid_command() {
        let mut gateway = MockCategoryGateway::new();
        gateway
            .expect_create()
            .times(1)
            .returning(|category| Ok(category.clone()));

        let handler = CreateCategoryHandler::new(Arc::new(gateway), publisher_ok());
        let command = CreateCategoryCommand::new("Movies", "Most watched", true);

        let output = handler.execute(command).await.unwrap().unwrap();
        assert!(!output.id.is_empty());
    }

    #[tokio::test]
    async fn test_create_category_with_invalid_name_returns_notification() {
        let mut gateway = MockCategoryGateway::new();
        gateway.expect_create().never();
        let mut publisher = MockDomainEventPublisher::new();
        publisher.expect_publish_all().never();

        let handler = CreateCategoryHandler::new(Arc::new(gateway), Arc::new(publisher));
        let command = CreateCategoryCommand::new("", "Most watched", true);

        let notification = handler.execute(command).await.unwrap().unwrap_err();
        assert_eq!(notification.messages(), vec!["'name' should not be empty"]);
    }

    #[tokio::test]
    async fn test_create_category_propagates_gateway_failure() {
        let mut gateway = MockCategoryGateway::new();
        gateway
            .expect_create()
            .returning(|_| Err(anyhow::anyhow!("storage offline").into()));

        let handler = CreateCategoryHandler::new(Arc::new(gateway), publisher_ok());
        let command = CreateCategoryCommand::new("Movies", "", true);

        let result = handler.execute(command).await;
        assert!(result.is_err());
    }
}
