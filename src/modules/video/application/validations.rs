use crate::shared::domain::identifier::Identifier;
use crate::shared::domain::validation::{Notification, ValidationError, ValidationHandler};
use crate::shared::errors::DomainResult;

/// Append one notification error naming every id the gateway could not
/// resolve, e.g. `Some categories could not be found: 123, 456`.
pub(crate) fn append_missing_references<I: Identifier>(
    notification: &mut Notification,
    label: &str,
    ids: &[I],
    found: &[I],
) -> DomainResult<()> {
    if ids.is_empty() || found.len() == ids.len() {
        return Ok(());
    }
    let missing: Vec<&str> = ids
        .iter()
        .filter(|id| !found.contains(*id))
        .map(|id| id.value())
        .collect();
    notification.append(ValidationError::new(format!(
        "Some {} could not be found: {}",
        label,
        missing.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::domain::CategoryId;

    #[test]
    fn test_nothing_is_appended_when_everything_resolves() {
        let ids = vec![CategoryId::from("a"), CategoryId::from("b")];
        let mut notification = Notification::create();

        append_missing_references(&mut notification, "categories", &ids, &ids.clone()).unwrap();

        assert!(!notification.has_errors());
    }

    #[test]
    fn test_missing_ids_are_listed_in_input_order() {
        let ids = vec![
            CategoryId::from("a"),
            CategoryId::from("b"),
            CategoryId::from("c"),
        ];
        let found = vec![CategoryId::from("b")];
        let mut notification = Notification::create();

        append_missing_references(&mut notification, "categories", &ids, &found).unwrap();

        assert_eq!(
            notification.messages(),
            vec!["Some categories could not be found: a, c"]
        );
    }
}
