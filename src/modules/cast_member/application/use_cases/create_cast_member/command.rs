use crate::modules::cast_member::domain::CastMemberKind;

/// Command for creating a new cast member
///
/// `kind` stays optional on purpose: a missing value is an expected user
/// input error reported through the notification, not a malformed request.
#[derive(Debug, Clone)]
pub struct CreateCastMemberCommand {
    pub name: String,
    pub kind: Option<CastMemberKind>,
}

impl CreateCastMemberCommand {
    pub fn new(name: impl Into<String>, kind: Option<CastMemberKind>) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
