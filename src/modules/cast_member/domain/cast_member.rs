use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::define_id;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::validation::{FailFast, ValidationHandler};
use crate::shared::errors::{DomainError, DomainResult};

use super::events::CastMemberEvent;

define_id!(CastMemberId);

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

/// Role a cast member plays in a video production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CastMemberKind {
    Actor,
    Director,
}

impl std::fmt::Display for CastMemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CastMemberKind::Actor => write!(f, "ACTOR"),
            CastMemberKind::Director => write!(f, "DIRECTOR"),
        }
    }
}

/// CastMember aggregate root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    id: CastMemberId,
    name: String,
    kind: CastMemberKind,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip)]
    events: Vec<CastMemberEvent>,
}

impl CastMember {
    pub const AGGREGATE_NAME: &'static str = "CastMember";

    /// Create a new cast member, failing fast on the first violated invariant.
    pub fn new(name: impl Into<String>, kind: CastMemberKind) -> DomainResult<Self> {
        Self::new_with(name, kind, &mut FailFast::new())
    }

    /// Create a new cast member, reporting violations through the supplied
    /// handler.
    pub fn new_with<H: ValidationHandler>(
        name: impl Into<String>,
        kind: CastMemberKind,
        handler: &mut H,
    ) -> DomainResult<Self> {
        let now = Utc::now();
        let mut member = Self {
            id: CastMemberId::unique(),
            name: name.into(),
            kind,
            created_at: now,
            updated_at: now,
            events: Vec::new(),
        };
        member.validate(handler)?;
        let event = CastMemberEvent::created(&member.id);
        member.record(event);
        Ok(member)
    }

    /// Rehydrate from storage. No validation, no events.
    pub fn with(
        id: CastMemberId,
        name: impl Into<String>,
        kind: CastMemberKind,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            created_at,
            updated_at,
            events: Vec::new(),
        }
    }

    /// Replace name and kind, then re-run self-validation.
    pub fn update<H: ValidationHandler>(
        &mut self,
        name: impl Into<String>,
        kind: CastMemberKind,
        handler: &mut H,
    ) -> DomainResult<&mut Self> {
        self.name = name.into();
        self.kind = kind;
        self.updated_at = Utc::now();
        self.validate(handler)?;
        let event = CastMemberEvent::updated(&self.id);
        self.record(event);
        Ok(self)
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
                "'name' must be between 3 and 255 characters",
            ));
        }
        Ok(())
    }

    fn record(&mut self, event: CastMemberEvent) {
        self.events.push(event);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CastMemberKind {
        self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl AggregateRoot for CastMember {
    type Id = CastMemberId;
    type Event = CastMemberEvent;

    fn id(&self) -> &CastMemberId {
        &self.id
    }

    fn pending_events(&self) -> &[CastMemberEvent] {
        &self.events
    }

    fn take_events(&mut self) -> Vec<CastMemberEvent> {
        std::mem::take(&mut self.events)
    }
}

// Aggregate identity: equality is by id.
impl PartialEq for CastMember {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CastMember {}
