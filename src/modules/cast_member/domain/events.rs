use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::domain::events::DomainEvent;

use super::cast_member::CastMemberId;

/// Domain events recorded by the CastMember aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum CastMemberEvent {
    CastMemberCreated {
        cast_member_id: CastMemberId,
        occurred_at: DateTime<Utc>,
    },
    CastMemberUpdated {
        cast_member_id: CastMemberId,
        occurred_at: DateTime<Utc>,
    },
    CastMemberDeleted {
        cast_member_id: CastMemberId,
        occurred_at: DateTime<Utc>,
    },
}

impl CastMemberEvent {
    pub fn created(cast_member_id: &CastMemberId) -> Self {
        Self::CastMemberCreated {
            cast_member_id: cast_member_id.clone(),
            occurred_at: Utc::now(),
        }
    }

    pub fn updated(cast_member_id: &CastMemberId) -> Self {
        Self::CastMemberUpdated {
            cast_member_id: cast_member_id.clone(),
            occurred_at: Utc::now(),
        }
    }

    pub fn deleted(cast_member_id: &CastMemberId) -> Self {
        Self::CastMemberDeleted {
            cast_member_id: cast_member_id.clone(),
            occurred_at: Utc::now(),
        }
    }
}

impl DomainEvent for CastMemberEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::CastMemberCreated { .. } => "CastMemberCreated",
            Self::CastMemberUpdated { .. } => "CastMemberUpdated",
            Self::CastMemberDeleted { .. } => "CastMemberDeleted",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::CastMemberCreated { occurred_at, .. }
            | Self::CastMemberUpdated { occurred_at, .. }
            | Self::CastMemberDeleted { occurred_at, .. } => *occurred_at,
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            Self::CastMemberCreated { cast_member_id, .. }
            | Self::CastMemberUpdated { cast_member_id, .. }
            | Self::CastMemberDeleted { cast_member_id, .. } => cast_member_id.as_str(),
        }
    }
}
