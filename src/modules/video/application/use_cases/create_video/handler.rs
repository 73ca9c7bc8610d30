use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::domain::{CastMemberGateway, CastMemberId};
use crate::modules::category::domain::{CategoryGateway, CategoryId};
use crate::modules::genre::domain::{GenreGateway, GenreId};
use crate::modules::video::application::validations::append_missing_references;
use crate::modules::video::domain::{Rating, Video, VideoGateway};
use crate::shared::application::use_case::{NotificationResult, NotificationUseCase};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::events::{boxed, DomainEventPublisher};
use crate::shared::domain::validation::{Notification, ValidationError, ValidationHandler};
use crate::shared::errors::DomainResult;

use super::{command::CreateVideoCommand, result::CreateVideoOutput};

/// Use case handler for creating a new video
///
/// Referenced categories, genres and cast members are resolved through
/// their gateways concurrently; every unknown id, missing required field
/// and aggregate violation lands in the same notification.
pub struct CreateVideoHandler {
    video_gateway: Arc<dyn VideoGateway>,
    category_gateway: Arc<dyn CategoryGateway>,
    genre_gateway: Arc<dyn GenreGateway>,
    cast_member_gateway: Arc<dyn CastMemberGateway>,
    event_publisher: Arc<dyn DomainEventPublisher>,
}

impl CreateVideoHandler {
    pub fn new(
        video_gateway: Arc<dyn VideoGateway>,
        category_gateway: Arc<dyn CategoryGateway>,
        genre_gateway: Arc<dyn GenreGateway>,
        cast_member_gateway: Arc<dyn CastMemberGateway>,
        event_publisher: Arc<dyn DomainEventPublisher>,
    ) -> Self {
        Self {
            video_gateway,
            category_gateway,
            genre_gateway,
            cast_member_gateway,
            event_publisher,
        }
    }
}

#[async_trait]
impl NotificationUseCase<CreateVideoCommand, CreateVideoOutput> for CreateVideoHandler {
    async fn execute(
        &self,
        command: CreateVideoCommand,
    ) -> DomainResult<NotificationResult<CreateVideoOutput>> {
        let category_ids: Vec<CategoryId> = command
            .categories
            .iter()
            .map(|raw| CategoryId::from(raw.as_str()))
            .collect();
        let genre_ids: Vec<GenreId> = command
            .genres
            .iter()
            .map(|raw| GenreId::from(raw.as_str()))
            .collect();
        let member_ids: Vec<CastMemberId> = command
            .cast_members
            .iter()
            .map(|raw| CastMemberId::from(raw.as_str()))
            .collect();

        let (found_categories, found_genres, found_members) = futures::try_join!(
            self.category_gateway.exists_by_ids(&category_ids),
            self.genre_gateway.exists_by_ids(&genre_ids),
            self.cast_member_gateway.exists_by_ids(&member_ids),
        )?;

        let mut notification = Notification::create();
        append_missing_references(&mut notification, "categories", &category_ids, &found_categories)?;
        append_missing_references(&mut notification, "genres", &genre_ids, &found_genres)?;
        append_missing_references(&mut notification, "cast members", &member_ids, &found_members)?;

        let rating = command.rating.as_deref().and_then(Rating::of);
        let video = match (command.launched_at, rating) {
            (Some(launched_at), Some(rating)) => Some(Video::new_with(
                command.title,
                command.description,
                launched_at,
                command.duration,
                rating,
                command.opened,
                command.published,
                category_ids,
                genre_ids,
                member_ids,
                &mut notification,
            )?),
            (launched_at, rating) => {
                // Required fields are missing; still run the scalar checks
                // so every violation is reported in validator order.
                notification.validate(|| Video::validate_title(&command.title))?;
                notification.validate(|| Video::validate_description(&command.description))?;
                if launched_at.is_none() {
                    notification.append(ValidationError::new("'launched_at' should not be null"))?;
                }
                if rating.is_none() {
                    notification.append(ValidationError::new("'rating' should not be null"))?;
                }
                None
            }
        };

        let Some(mut video) = video else {
            return Ok(Err(notification));
        };
        if notification.has_errors() {
            return Ok(Err(notification));
        }

        let created = self.video_gateway.create(&video).await?;
        self.event_publisher
            .publish_all(boxed(video.take_events()))
            .await?;

        Ok(Ok(CreateVideoOutput::from(&created)))
    }
}
