use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::cast_member::domain::{CastMember, CastMemberKind};
use crate::shared::domain::aggregate::AggregateRoot;

/// Full cast member projection returned to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMemberOutput {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CastMemberKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&CastMember> for CastMemberOutput {
    fn from(member: &CastMember) -> Self {
        Self {
            id: member.id().to_string(),
            name: member.name().to_string(),
            kind: member.kind(),
            created_at: member.created_at(),
            updated_at: member.updated_at(),
        }
    }
}
