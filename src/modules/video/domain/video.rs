use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::define_id;
use crate::modules::cast_member::domain::CastMemberId;
use crate::modules::category::domain::CategoryId;
use crate::modules::genre::domain::GenreId;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::validation::{FailFast, ValidationHandler};
use crate::shared::errors::{DomainError, DomainResult};

use super::events::VideoEvent;
use super::rating::Rating;

define_id!(VideoId);

const TITLE_MAX_LENGTH: usize = 255;
const DESCRIPTION_MAX_LENGTH: usize = 4000;

/// Video aggregate root.
///
/// References categories, genres and cast members by id; whether those ids
/// resolve is a command-level concern checked against the other gateways.
/// Media assets (trailer, banner, video files) live with the object storage
/// layer and are not modeled here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    id: VideoId,
    title: String,
    description: String,
    launched_at: i32,
    duration: f64,
    rating: Rating,
    opened: bool,
    published: bool,
    categories: Vec<CategoryId>,
    genres: Vec<GenreId>,
    cast_members: Vec<CastMemberId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip)]
    events: Vec<VideoEvent>,
}

impl Video {
    pub const AGGREGATE_NAME: &'static str = "Video";

    /// Create a new video, failing fast on the first violated invariant.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        launched_at: i32,
        duration: f64,
        rating: Rating,
        opened: bool,
        published: bool,
        categories: Vec<CategoryId>,
        genres: Vec<GenreId>,
        cast_members: Vec<CastMemberId>,
    ) -> DomainResult<Self> {
        Self::new_with(
            title,
            description,
            launched_at,
            duration,
            rating,
            opened,
            published,
            categories,
            genres,
            cast_members,
            &mut FailFast::new(),
        )
    }

    /// Create a new video, reporting violations through the supplied handler.
    #[allow(clippy::too_many_arguments)]
    pub fn new_with<H: ValidationHandler>(
        title: impl Into<String>,
        description: impl Into<String>,
        launched_at: i32,
        duration: f64,
        rating: Rating,
        opened: bool,
        published: bool,
        categories: Vec<CategoryId>,
        genres: Vec<GenreId>,
        cast_members: Vec<CastMemberId>,
        handler: &mut H,
    ) -> DomainResult<Self> {
        let now = Utc::now();
        let mut video = Self {
            id: VideoId::unique(),
            title: title.into(),
            description: description.into(),
            launched_at,
            duration,
            rating,
            opened,
            published,
            categories,
            genres,
            cast_members,
            created_at: now,
            updated_at: now,
            events: Vec::new(),
        };
        video.validate(handler)?;
        let event = VideoEvent::created(&video.id);
        video.record(event);
        Ok(video)
    }

    /// Rehydrate from storage. No validation, no events.
    #[allow(clippy::too_many_arguments)]
    pub fn with(
        id: VideoId,
        title: impl Into<String>,
        description: impl Into<String>,
        launched_at: i32,
        duration: f64,
        rating: Rating,
        opened: bool,
        published: bool,
        categories: Vec<CategoryId>,
        genres: Vec<GenreId>,
        cast_members: Vec<CastMemberId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            launched_at,
            duration,
            rating,
            opened,
            published,
            categories,
            genres,
            cast_members,
            created_at,
            updated_at,
            events: Vec::new(),
        }
    }

    /// Replace every mutable field and re-run self-validation.
    #[allow(clippy::too_many_arguments)]
    pub fn update<H: ValidationHandler>(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        launched_at: i32,
        duration: f64,
        rating: Rating,
        opened: bool,
        published: bool,
        categories: Vec<CategoryId>,
        genres: Vec<GenreId>,
        cast_members: Vec<CastMemberId>,
        handler: &mut H,
    ) -> DomainResult<&mut Self> {
        self.title = title.into();
        self.description = description.into();
        self.launched_at = launched_at;
        self.duration = duration;
        self.rating = rating;
        self.opened = opened;
        self.published = published;
        self.categories = categories;
        self.genres = genres;
        self.cast_members = cast_members;
        self.updated_at = Utc::now();
        self.validate(handler)?;
        let event = VideoEvent::updated(&self.id);
        self.record(event);
        Ok(self)
    }

    pub fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        handler.validate(|| Self::validate_title(&self.title))?;
        handler.validate(|| Self::validate_description(&self.description))?;
        Ok(())
    }

    pub fn validate_title(title: &str) -> DomainResult<()> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("'title' should not be empty"));
        }
        if trimmed.chars().count() > TITLE_MAX_LENGTH {
            return Err(DomainError::validation(
                "'title' must be between 1 and 255 characters",
            ));
        }
        Ok(())
    }

    pub fn validate_description(description: &str) -> DomainResult<()> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("'description' should not be empty"));
        }
        if trimmed.chars().count() > DESCRIPTION_MAX_LENGTH {
            return Err(DomainError::validation(
                "'description' must be between 1 and 4000 characters",
            ));
        }
        Ok(())
    }

    fn record(&mut self, event: VideoEvent) {
        self.events.push(event);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn launched_at(&self) -> i32 {
        self.launched_at
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    pub fn is_published(&self) -> bool {
        self.published
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    pub fn genres(&self) -> &[GenreId] {
        &self.genres
    }

    pub fn cast_members(&self) -> &[CastMemberId] {
        &self.cast_members
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl AggregateRoot for Video {
    type Id = VideoId;
    type Event = VideoEvent;

    fn id(&self) -> &VideoId {
        &self.id
    }

    fn pending_events(&self) -> &[VideoEvent] {
        &self.events
    }

    fn take_events(&mut self) -> Vec<VideoEvent> {
        std::mem::take(&mut self.events)
    }
}

// Aggregate identity: equality is by id.
impl PartialEq for Video {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Video {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::domain::events::DomainEvent;
    use crate::shared::domain::validation::Notification;

    fn valid_video() -> Video {
        Video::new(
            "Young Frankenstein",
            "A 1974 horror comedy",
            1974,
            106.0,
            Rating::Age14,
            false,
            true,
            vec![CategoryId::from("cat-1")],
            vec![GenreId::from("gen-1")],
            vec![CastMemberId::from("mem-1")],
        )
        .unwrap()
    }

    #[test]
    fn test_new_video_is_valid_and_records_creation_event() {
        let video = valid_video();

        assert_eq!(video.title(), "Young Frankenstein");
        assert_eq!(video.launched_at(), 1974);
        assert_eq!(video.rating(), Rating::Age14);
        assert_eq!(video.pending_events().len(), 1);
        assert_eq!(video.pending_events()[0].event_type(), "VideoCreated");
    }

    #[test]
    fn test_new_with_empty_title_fails_fast() {
        let result = Video::new(
            "",
            "Some description",
            2020,
            90.0,
            Rating::L,
            false,
            false,
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );

        match result {
            Err(DomainError::Validation(error)) => {
                assert_eq!(error.message(), "'title' should not be empty");
            }
            _ => panic!("expected a validation failure"),
        }
    }

    #[test]
    fn test_title_and_description_violations_accumulate() {
        let mut notification = Notification::create();
        Video::new_with(
            "",
            "",
            2020,
            90.0,
            Rating::L,
            false,
            false,
            Vec::new(),
            Vec::new(),
            Vec::new(),
            &mut notification,
        )
        .unwrap();

        assert_eq!(
            notification.messages(),
            vec![
                "'title' should not be empty",
                "'description' should not be empty",
            ]
        );
    }

    #[test]
    fn test_oversized_description_is_rejected() {
        let result = Video::new(
            "Title",
            "d".repeat(4001),
            2020,
            90.0,
            Rating::L,
            false,
            false,
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );

        match result {
            Err(DomainError::Validation(error)) => {
                assert_eq!(
                    error.message(),
                    "'description' must be between 1 and 4000 characters"
                );
            }
            _ => panic!("expected a validation failure"),
        }
    }

    #[test]
    fn test_update_replaces_references_and_records_event() {
        let mut video = valid_video();
        video.take_events();

        video
            .update(
                "Blazing Saddles",
                "A 1974 western comedy",
                1974,
                93.0,
                Rating::Age16,
                true,
                false,
                vec![CategoryId::from("cat-2")],
                Vec::new(),
                Vec::new(),
                &mut FailFast::new(),
            )
            .unwrap();

        assert_eq!(video.title(), "Blazing Saddles");
        assert_eq!(video.categories(), &[CategoryId::from("cat-2")]);
        assert!(video.genres().is_empty());
        assert_eq!(video.pending_events()[0].event_type(), "VideoUpdated");
    }
}
