use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::domain::{CategoryGateway, CategoryId};
use crate::modules::genre::domain::{Genre, GenreGateway};
use crate::shared::application::use_case::{NotificationResult, NotificationUseCase};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::events::{boxed, DomainEventPublisher};
use crate::shared::domain::validation::{Notification, ValidationError, ValidationHandler};
use crate::shared::errors::DomainResult;

use super::{command::CreateGenreCommand, result::CreateGenreOutput};

/// Use case handler for creating a new genre
///
/// Category membership is a command-level check: unknown ids land in the
/// same notification as the aggregate's own violations, so the caller sees
/// both at once.
pub struct CreateGenreHandler {
    genre_gateway: Arc<dyn GenreGateway>,
    category_gateway: Arc<dyn CategoryGateway>,
    event_publisher: Arc<dyn DomainEventPublisher>,
}

impl CreateGenreHandler {
    pub fn new(
        genre_gateway: Arc<dyn GenreGateway>,
        category_gateway: Arc<dyn CategoryGateway>,
        event_publisher: Arc<dyn DomainEventPublisher>,
    ) -> Self {
        Self {
            genre_gateway,
            category_gateway,
            event_publisher,
        }
    }

    async fn validate_categories(
        &self,
        notification: &mut Notification,
        ids: &[CategoryId],
    ) -> DomainResult<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let found = self.category_gateway.exists_by_ids(ids).await?;
        if found.len() == ids.len() {
            return Ok(());
        }
        let missing: Vec<&str> = ids
            .iter()
            .filter(|id| !found.contains(*id))
            .map(|id| id.as_str())
            .collect();
        notification.append(ValidationError::new(format!(
            "Some categories could not be found: {}",
            missing.join(", ")
        )))
    }
}

#[async_trait]
impl NotificationUseCase<CreateGenreCommand, CreateGenreOutput> for CreateGenreHandler {
    async fn execute(
        &self,
        command: CreateGenreCommand,
    ) -> DomainResult<NotificationResult<CreateGenreOutput>> {
        let category_ids: Vec<CategoryId> = command
            .categories
            .iter()
            .map(|raw| CategoryId::from(raw.as_str()))
            .collect();

        let mut notification = Notification::create();
        self.validate_categories(&mut notification, &category_ids)
            .await?;

        let mut genre = Genre::new_with(command.name, command.is_active, &mut notification)?;
        genre.add_categories(category_ids);

        if notification.has_errors() {
            return Ok(Err(notification));
        }

        let created = self.genre_gateway.create(&genre).await?;
        self.event_publisher
            .publish_all(boxed(genre.take_events()))
            .await?;

        Ok(Ok(CreateGenreOutput::from(&created)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::domain::gateway::MockCategoryGateway;
    use crate::modules::genre::domain::gateway::MockGenreGateway;
    use crate::shared::domain::events::MockDomainEventPublisher;

    fn publisher_ok() -> Arc<MockDomainEventPublisher> {
        let mut publisher = MockDomainEventPublisher::new();
        publisher.expect_publish_all().returning(|_| Ok(()));
        Arc::new(publisher)
    }

    #[tokio::test]
    async fn test_create_genre_with_valid_command_and_categories() {
        let mut genre_gateway = MockGenreGateway::new();
        genre_gateway
            .expect_create()
            .times(1)
            .returning(|genre| Ok(genre.clone()));

        let mut category_gateway = MockCategoryGateway::new();
        category_gateway
            .expect_exists_by_ids()
            .returning(|ids| Ok(ids.to_vec()));

        let handler = CreateGenreHandler::new(
            Arc::new(genre_gateway),
            Arc::new(category_gateway),
            publisher_ok(),
        );
        let command = CreateGenreCommand::new("Action", true, vec!["cat-1".to_string()]);

        let output = handler.execute(command).await.unwrap().unwrap();
        assert!(!output.id.is_empty());
    }

    #[tokio::test]
    async fn test_create_genre_reports_unknown_categories_and_bad_name_together() {
        let mut genre_gateway = MockGenreGateway::new();
        genre_gateway.expect_create().never();

        let mut category_gateway = MockCategoryGateway::new();
        category_gateway.expect_exists_by_ids().returning(|_| Ok(vec![]));

        let mut publisher = MockDomainEventPublisher::new();
        publisher.expect_publish_all().never();

        let handler = CreateGenreHandler::new(
            Arc::new(genre_gateway),
            Arc::new(category_gateway),
            Arc::new(publisher),
        );
        let command = CreateGenreCommand::new(
            "",
            true,
            vec!["cat-1".to_string(), "cat-2".to_string()],
        );

        let notification = handler.execute(command).await.unwrap().unwrap_err();
        assert_eq!(
            notification.messages(),
            vec![
                "Some categories could not be found: cat-1, cat-2",
                "'name' should not be empty",
            ]
        );
    }

    #[tokio::test]
    async fn test_create_genre_without_categories_skips_the_lookup() {
        let mut genre_gateway = MockGenreGateway::new();
        genre_gateway.expect_create().returning(|genre| Ok(genre.clone()));

        let mut category_gateway = MockCategoryGateway::new();
        category_gateway.expect_exists_by_ids().never();

        let handler = CreateGenreHandler::new(
            Arc::new(genre_gateway),
            Arc::new(category_gateway),
            publisher_ok(),
        );
        let command = CreateGenreCommand::new("Action", true, Vec::new());

        assert!(handler.execute(command).await.unwrap().is_ok());
    }
}
