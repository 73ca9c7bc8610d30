use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::domain::{CategoryGateway, CategoryId};
use crate::modules::genre::domain::{Genre, GenreGateway, GenreId};
use crate::shared::application::use_case::{NotificationResult, NotificationUseCase};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::events::{boxed, DomainEventPublisher};
use crate::shared::domain::validation::{Notification, ValidationError, ValidationHandler};
use crate::shared::errors::{DomainError, DomainResult};

use super::{command::UpdateGenreCommand, result::UpdateGenreOutput};

/// Use case handler for updating an existing genre
pub struct UpdateGenreHandler {
    genre_gateway: Arc<dyn GenreGateway>,
    category_gateway: Arc<dyn CategoryGateway>,
    event_publisher: Arc<dyn DomainEventPublisher>,
}

impl UpdateGenreHandler {
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
impl NotificationUseCase<UpdateGenreCommand, UpdateGenreOutput> for UpdateGenreHandler {
    async fn execute(
        &self,
        command: UpdateGenreCommand,
    ) -> DomainResult<NotificationResult<UpdateGenreOutput>> {
        let id = GenreId::from(command.id.as_str());
        let mut genre = self
            .genre_gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(Genre::AGGREGATE_NAME, command.id))?;

        let category_ids: Vec<CategoryId> = command
            .categories
            .iter()
            .map(|raw| CategoryId::from(raw.as_str()))
            .collect();

        let mut notification = Notification::create();
        self.validate_categories(&mut notification, &category_ids)
            .await?;
        genre.update(
            command.name,
            command.is_active,
            category_ids,
            &mut notification,
        )?;

        if notification.has_errors() {
            return Ok(Err(notification));
        }

        let updated = self.genre_gateway.update(&genre).await?;
        self.event_publisher
            .publish_all(boxed(genre.take_events()))
            .await?;

        Ok(Ok(UpdateGenreOutput::from(&updated)))
    }
}
