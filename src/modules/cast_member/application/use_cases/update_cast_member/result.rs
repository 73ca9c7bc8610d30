use serde::{Deserialize, Serialize};

use crate::modules::cast_member::domain::CastMember;
use crate::shared::domain::aggregate::AggregateRoot;

/// Result of updating a cast member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCastMemberOutput {
    pub id: String,
}

impl From<&CastMember> for UpdateCastMemberOutput {
    fn from(member: &CastMember) -> Self {
        Self {
            id: member.id().to_string(),
        }
    }
}
