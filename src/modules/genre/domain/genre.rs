use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::define_id;
use crate::modules::category::domain::CategoryId;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::validation::{FailFast, ValidationHandler};
use crate::shared::errors::{DomainError, DomainResult};

use super::events::GenreEvent;

define_id!(GenreId);

const NAME_MIN_LENGTH: usize = 1;
const NAME_MAX_LENGTH: usize = 255;

/// Genre aggregate root.
///
/// Holds the ids of the categories it belongs to; whether those ids resolve
/// is a command-level concern checked against the category gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    id: GenreId,
    name: String,
    active: bool,
    categories: Vec<CategoryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    events: Vec<GenreEvent>,
}

impl Genre {
    pub const AGGREGATE_NAME: &'static str = "Genre";

    /// Create a new genre, failing fast on the first violated invariant.
    pub fn new(name: impl Into<String>, active: bool) -> DomainResult<Self> {
        Self::new_with(name, active, &mut FailFast::new())
    }

    /// Create a new genre, reporting violations through the supplied handler.
    pub fn new_with<H: ValidationHandler>(
        name: impl Into<String>,
        active: bool,
        handler: &mut H,
    ) -> DomainResult<Self> {
        let now = Utc::now();
        let mut genre = Self {
            id: GenreId::unique(),
            name: name.into(),
            active,
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
            events: Vec::new(),
        };
        genre.validate(handler)?;
        let event = GenreEvent::created(&genre.id);
        genre.record(event);
        Ok(genre)
    }

    /// Rehydrate from storage. No validation, no events.
    #[allow(clippy::too_many_arguments)]
    pub fn with(
        id: GenreId,
        name: impl Into<String>,
        active: bool,
        categories: Vec<CategoryId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            active,
            categories,
            created_at,
            updated_at,
            deleted_at,
            events: Vec::new(),
        }
    }

    /// Replace name, activation and category membership wholesale, then
    /// re-run self-validation through the supplied handler.
    pub fn update<H: ValidationHandler>(
        &mut self,
        name: impl Into<String>,
        active: bool,
        categories: Vec<CategoryId>,
        handler: &mut H,
    ) -> DomainResult<&mut Self> {
        self.name = name.into();
        self.categories = categories;
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.updated_at = Utc::now();
        self.validate(handler)?;
        let event = GenreEvent::updated(&self.id);
        self.record(event);
        Ok(self)
    }

    pub fn add_category(&mut self, category_id: CategoryId) -> &mut Self {
        if !self.categories.contains(&category_id) {
            self.categories.push(category_id);
            self.updated_at = Utc::now();
        }
        self
    }

    pub fn add_categories(&mut self, category_ids: Vec<CategoryId>) -> &mut Self {
        for category_id in category_ids {
            self.add_category(category_id);
        }
        self
    }

    pub fn remove_category(&mut self, category_id: &CategoryId) -> &mut Self {
        if let Some(position) = self.categories.iter().position(|id| id == category_id) {
            self.categories.remove(position);
            self.updated_at = Utc::now();
        }
        self
    }

    pub fn activate(&mut self) -> &mut Self {
        self.deleted_at = None;
        self.active = true;
        self.updated_at = Utc::now();
        self
    }

    pub fn deactivate(&mut self) -> &mut Self {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(Utc::now());
        }
        self.active = false;
        self.updated_at = Utc::now();
        self
    }

    pub fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        handler.validate(|| Self::validate_name(&self.name))
    }

    pub fn validate_name(name: &str) -> DomainResult<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("'name' should not be empty"));
        }
        let length = trimmed.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            return Err(DomainError::validation(
                "'name' must be between 1 and 255 characters",
            ));
        }
        Ok(())
    }

    fn record(&mut self, event: GenreEvent) {
        self.events.push(event);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl AggregateRoot for Genre {
    type Id = GenreId;
    type Event = GenreEvent;

    fn id(&self) -> &GenreId {
        &self.id
    }

    fn pending_events(&self) -> &[GenreEvent] {
        &self.events
    }

    fn take_events(&mut self) -> Vec<GenreEvent> {
        std::mem::take(&mut self.events)
    }
}

// Aggregate identity: equality is by id.
impl PartialEq for Genre {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Genre {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::domain::events::DomainEvent;

    #[test]
    fn test_new_genre_is_valid_and_records_creation_event() {
        let genre = Genre::new("Action", true).unwrap();

        assert_eq!(genre.name(), "Action");
        assert!(genre.is_active());
        assert!(genre.categories().is_empty());
        assert_eq!(genre.pending_events().len(), 1);
        assert_eq!(genre.pending_events()[0].event_type(), "GenreCreated");
    }

    #[test]
    fn test_one_character_name_is_accepted() {
        // Genre names only need a single character, unlike categories.
        assert!(Genre::new("A", true).is_ok());
    }

    #[test]
    fn test_new_with_empty_name_fails_fast() {
        let result = Genre::new("  ", true);
        match result {
            Err(DomainError::Validation(error)) => {
                assert_eq!(error.message(), "'name' should not be empty");
            }
            _ => panic!("expected a validation failure"),
        }
    }

    #[test]
    fn test_add_category_ignores_duplicates() {
        let mut genre = Genre::new("Action", true).unwrap();
        let category_id = CategoryId::from("cat-1");

        genre.add_category(category_id.clone());
        genre.add_category(category_id.clone());

        assert_eq!(genre.categories(), &[category_id]);
    }

    #[test]
    fn test_remove_category_is_a_no_op_for_unknown_ids() {
        let mut genre = Genre::new("Action", true).unwrap();
        genre.add_category(CategoryId::from("cat-1"));

        genre.remove_category(&CategoryId::from("cat-2"));
        assert_eq!(genre.categories().len(), 1);

        genre.remove_category(&CategoryId::from("cat-1"));
        assert!(genre.categories().is_empty());
    }

    #[test]
    fn test_update_replaces_membership_wholesale() {
        let mut genre = Genre::new("Action", true).unwrap();
        genre.add_category(CategoryId::from("cat-1"));
        genre.take_events();

        genre
            .update(
                "Adventure",
                false,
                vec![CategoryId::from("cat-2")],
                &mut FailFast::new(),
            )
            .unwrap();

        assert_eq!(genre.name(), "Adventure");
        assert!(!genre.is_active());
        assert!(genre.deleted_at().is_some());
        assert_eq!(genre.categories(), &[CategoryId::from("cat-2")]);
        assert_eq!(genre.pending_events()[0].event_type(), "GenreUpdated");
    }
}
