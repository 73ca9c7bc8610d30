use serde::{Deserialize, Serialize};

use crate::modules::cast_member::domain::CastMember;
use crate::shared::domain::aggregate::AggregateRoot;

/// Result of creating a new cast member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCastMemberOutput {
    pub id: String,
}

impl From<&CastMember> for CreateCastMemberOutput {
    fn from(member: &CastMember) -> Self {
        Self {
            id: member.id().to_string(),
        }
    }
}
