use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::cast_member::domain::{CastMember, CastMemberKind};
use crate::shared::domain::aggregate::AggregateRoot;

/// One row of a cast member listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMemberListOutput {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CastMemberKind,
    pub created_at: DateTime<Utc>,
}

impl From<&CastMember> for CastMemberListOutput {
    fn from(member: &CastMember) -> Self {
        Self {
            id: member.id().to_string(),
            name: member.name().to_string(),
            kind: member.kind(),
            created_at: member.created_at(),
        }
    }
}
