use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::domain::{CastMemberGateway, CastMemberId};
use crate::modules::category::domain::{CategoryGateway, CategoryId};
use crate::modules::genre::domain::{GenreGateway, GenreId};
use crate::modules::video::application::validations::append_missing_references;
use crate::modules::video::domain::{Rating, Video, VideoGateway, VideoId};
use crate::shared::application::use_case::{NotificationResult, NotificationUseCase};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::events::{boxed, DomainEventPublisher};
use crate::shared::domain::validation::{Notification, ValidationError, ValidationHandler};
use crate::shared::errors::{DomainError, DomainResult};

use super::{command::UpdateVideoCommand, result::UpdateVideoOutput};

/// Use case handler for updating an existing video
pub struct UpdateVideoHandler {
    video_gateway: Arc<dyn VideoGateway>,
    category_gateway: Arc<dyn CategoryGateway>,
    genre_gateway: Arc<dyn GenreGateway>,
    cast_member_gateway: Arc<dyn CastMemberGateway>,
    event_publisher: Arc<dyn DomainEventPublisher>,
}

impl UpdateVideoHandler {
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
impl NotificationUseCase<UpdateVideoCommand, UpdateVideoOutput> for UpdateVideoHandler {
    async fn execute(
        &self,
        command: UpdateVideoCommand,
    ) -> DomainResult<NotificationResult<UpdateVideoOutput>> {
        let id = VideoId::from(command.id.as_str());
        let mut video = self
            .video_gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(Video::AGGREGATE_NAME, command.id.as_str()))?;

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
        match (command.launched_at, rating) {
            (Some(launched_at), Some(rating)) => {
                video.update(
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
                )?;
            }
            (launched_at, rating) => {
                notification.validate(|| Video::validate_title(&command.title))?;
                notification.validate(|| Video::validate_description(&command.description))?;
                if launched_at.is_none() {
                    notification.append(ValidationError::new("'launched_at' should not be null"))?;
                }
                if rating.is_none() {
                    notification.append(ValidationError::new("'rating' should not be null"))?;
                }
                return Ok(Err(notification));
            }
        }

        if notification.has_errors() {
            return Ok(Err(notification));
        }

        let updated = self.video_gateway.update(&video).await?;
        self.event_publisher
            .publish_all(boxed(video.take_events()))
            .await?;

        Ok(Ok(UpdateVideoOutput::from(&updated)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cast_member::domain::gateway::MockCastMemberGateway;
    use crate::modules::category::domain::gateway::MockCategoryGateway;
    use crate::modules::genre::domain::gateway::MockGenreGateway;
    use crate::modules::video::domain::gateway::MockVideoGateway;
    use crate::shared::domain::events::MockDomainEventPublisher;

    fn echoing_lookups() -> (
        Arc<MockCategoryGateway>,
        Arc<MockGenreGateway>,
        Arc<MockCastMemberGateway>,
    ) {
        let mut categories = MockCategoryGateway::new();
        categories
            .expect_exists_by_ids()
            .returning(|ids| Ok(ids.to_vec()));
        let mut genres = MockGenreGateway::new();
        genres
            .expect_exists_by_ids()
            .returning(|ids| Ok(ids.to_vec()));
        let mut members = MockCastMemberGateway::new();
        members
            .expect_exists_by_ids()
            .returning(|ids| Ok(ids.to_vec()));
        (Arc::new(categories), Arc::new(genres), Arc::new(members))
    }

    fn publisher_ok() -> Arc<MockDomainEventPublisher> {
        let mut publisher = MockDomainEventPublisher::new();
        publisher.expect_publish_all().returning(|_| Ok(()));
        Arc::new(publisher)
    }

    fn existing_video() -> Video {
        Video::new(
            "Young Frankenstein",
            "A 1974 horror comedy",
            1974,
            106.0,
            Rating::Age14,
            false,
            true,
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_update_video_with_valid_command() {
        let existing = existing_video();
        let id = existing.id().to_string();

        let mut video_gateway = MockVideoGateway::new();
        let found = existing.clone();
        video_gateway
            .expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        video_gateway
            .expect_update()
            .times(1)
            .returning(|video| Ok(video.clone()));
        let (categories, genres, members) = echoing_lookups();

        let handler = UpdateVideoHandler::new(
            Arc::new(video_gateway),
            categories,
            genres,
            members,
            publisher_ok(),
        );
        let command = UpdateVideoCommand::new(
            &id,
            "Blazing Saddles",
            "A 1974 western comedy",
            Some(1974),
            93.0,
            true,
            false,
            Some("16".to_string()),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );

        let output = handler.execute(command).await.unwrap().unwrap();
        assert_eq!(output.id, id);
    }

    #[tokio::test]
    async fn test_update_video_with_unknown_id_is_not_found() {
        let mut video_gateway = MockVideoGateway::new();
        video_gateway.expect_find_by_id().returning(|_| Ok(None));

        let (categories, genres, members) = echoing_lookups();
        let mut publisher = MockDomainEventPublisher::new();
        publisher.expect_publish_all().never();

        let handler = UpdateVideoHandler::new(
            Arc::new(video_gateway),
            categories,
            genres,
            members,
            Arc::new(publisher),
        );
        let command = UpdateVideoCommand::new(
            "missing-id",
            "Title",
            "Description",
            Some(2020),
            90.0,
            false,
            false,
            Some("L".to_string()),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );

        let error = handler.execute(command).await.unwrap_err();
        assert_eq!(error.to_string(), "Video with ID missing-id was not found");
    }

    #[tokio::test]
    async fn test_update_video_accumulates_reference_and_field_errors() {
        let existing = existing_video();
        let id = existing.id().to_string();

        let mut video_gateway = MockVideoGateway::new();
        let found = existing.clone();
        video_gateway
            .expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        video_gateway.expect_update().never();

        let mut categories = MockCategoryGateway::new();
        categories.expect_exists_by_ids().returning(|_| Ok(vec![]));
        let mut genres = MockGenreGateway::new();
        genres
            .expect_exists_by_ids()
            .returning(|ids| Ok(ids.to_vec()));
        let mut members = MockCastMemberGateway::new();
        members
            .expect_exists_by_ids()
            .returning(|ids| Ok(ids.to_vec()));

        let mut publisher = MockDomainEventPublisher::new();
        publisher.expect_publish_all().never();

        let handler = UpdateVideoHandler::new(
            Arc::new(video_gateway),
            Arc::new(categories),
            Arc::new(genres),
            Arc::new(members),
            Arc::new(publisher),
        );
        let command = UpdateVideoCommand::new(
            &id,
            "",
            "Still a movie",
            Some(2020),
            90.0,
            false,
            false,
            Some("L".to_string()),
            vec!["cat-9".to_string()],
            Vec::new(),
            Vec::new(),
        );

        let notification = handler.execute(command).await.unwrap().unwrap_err();
        assert_eq!(
            notification.messages(),
            vec![
                "Some categories could not be found: cat-9",
                "'title' should not be empty",
            ]
        );
    }
}
