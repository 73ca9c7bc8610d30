use crate::modules::cast_member::domain::CastMemberKind;

/// Command for updating an existing cast member
#[derive(Debug, Clone)]
pub struct UpdateCastMemberCommand {
    pub id: String,
    pub name: String,
    pub kind: Option<CastMemberKind>,
}

impl UpdateCastMemberCommand {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: Option<CastMemberKind>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}
