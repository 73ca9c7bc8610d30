use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::define_id;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::validation::{FailFast, ValidationHandler};
use crate::shared::errors::{DomainError, DomainResult};

use super::events::CategoryEvent;

define_id!(CategoryId);

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

/// Category aggregate root.
///
/// A soft-deletable grouping of videos. `deleted_at` tracks deactivation;
/// equality follows the identifier only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    events: Vec<CategoryEvent>,
}

impl Category {
    pub const AGGREGATE_NAME: &'static str = "Category";

    /// Create a new category, failing fast on the first violated invariant.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        active: bool,
    ) -> DomainResult<Self> {
        Self::new_with(name, description, active, &mut FailFast::new())
    }

    /// Create a new category, reporting violations through the supplied
    /// handler so a caller can batch them with its own checks.
    ///
    /// With an accumulating handler the instance is returned even when
    /// invalid; the caller inspects the handler before using it.
    pub fn new_with<H: ValidationHandler>(
        name: impl Into<String>,
        description: impl Into<String>,
        active: bool,
        handler: &mut H,
    ) -> DomainResult<Self> {
        let now = Utc::now();
        let mut category = Self {
            id: CategoryId::unique(),
            name: name.into(),
            description: description.into(),
            active,
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
            events: Vec::new(),
        };
        category.validate(handler)?;
        let event = CategoryEvent::created(&category.id);
        category.record(event);
        Ok(category)
    }

    /// Rehydrate from storage. No validation, no events.
    #[allow(clippy::too_many_arguments)]
    pub fn with(
        id: CategoryId,
        name: impl Into<String>,
        description: impl Into<String>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            active,
            created_at,
            updated_at,
            deleted_at,
            events: Vec::new(),
        }
    }

    /// Replace the mutable fields and re-run self-validation through the
    /// supplied handler.
    pub fn update<H: ValidationHandler>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        active: bool,
        handler: &mut H,
    ) -> DomainResult<&mut Self> {
        self.name = name.into();
        self.description = description.into();
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.updated_at = Utc::now();
        self.validate(handler)?;
        let event = CategoryEvent::updated(&self.id);
        self.record(event);
        Ok(self)
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

    /// Run every invariant check through the handler.
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
                "'name' must be between 3 and 255 characters",
            ));
        }
        Ok(())
    }

    fn record(&mut self, event: CategoryEvent) {
        self.events.push(event);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.active
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

impl AggregateRoot for Category {
    type Id = CategoryId;
    type Event = CategoryEvent;

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn pending_events(&self) -> &[CategoryEvent] {
        &self.events
    }

    fn take_events(&mut self) -> Vec<CategoryEvent> {
        std::mem::take(&mut self.events)
    }
}

// Aggregate identity: two categories are the same iff their ids match.
impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}
