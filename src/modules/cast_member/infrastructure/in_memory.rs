use async_trait::async_trait;
use dashmap::DashMap;

use crate::modules::cast_member::domain::{CastMember, CastMemberGateway, CastMemberId};
use crate::shared::application::pagination::{Pagination, SearchQuery, SortDirection};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::errors::DomainResult;

/// In-memory cast member gateway, same search contract as the other
/// in-memory gateways.
#[derive(Default)]
pub struct InMemoryCastMemberGateway {
    store: DashMap<CastMemberId, CastMember>,
}

impl InMemoryCastMemberGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn store_snapshot(&self, member: &CastMember) -> CastMember {
        let mut snapshot = member.clone();
        snapshot.take_events();
        snapshot
    }
}

#[async_trait]
impl CastMemberGateway for InMemoryCastMemberGateway {
    async fn create(&self, member: &CastMember) -> DomainResult<CastMember> {
        let snapshot = self.store_snapshot(member);
        self.store.insert(snapshot.id().clone(), snapshot.clone());
        log::debug!("stored cast member {}", snapshot.id());
        Ok(snapshot)
    }

    async fn update(&self, member: &CastMember) -> DomainResult<CastMember> {
        let snapshot = self.store_snapshot(member);
        self.store.insert(snapshot.id().clone(), snapshot.clone());
        Ok(snapshot)
    }

    async fn delete_by_id(&self, id: &CastMemberId) -> DomainResult<()> {
        self.store.remove(id);
        Ok(())
    }

    async fn find_by_id(&self, id: &CastMemberId) -> DomainResult<Option<CastMember>> {
        Ok(self.store.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<CastMember>> {
        let terms = query.terms.to_lowercase();
        let mut matches: Vec<CastMember> = self
            .store
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|member| terms.is_empty() || member.name().to_lowercase().contains(&terms))
            .collect();

        matches.sort_by(|a, b| {
            let ordering = match query.sort.as_str() {
                "created_at" => a.created_at().cmp(&b.created_at()),
                "updated_at" => a.updated_at().cmp(&b.updated_at()),
                _ => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
            }
            .then_with(|| a.id().cmp(b.id()));
            match query.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = matches.len() as u64;
        let items: Vec<CastMember> = matches
            .into_iter()
            .skip(query.offset())
            .take(query.limit())
            .collect();

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }

    async fn exists_by_ids(&self, ids: &[CastMemberId]) -> DomainResult<Vec<CastMemberId>> {
        Ok(ids
            .iter()
            .filter(|id| self.store.contains_key(*id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cast_member::domain::CastMemberKind;

    #[tokio::test]
    async fn test_find_all_filters_by_name() {
        let gateway = InMemoryCastMemberGateway::new();
        for (name, kind) in [
            ("Mel Brooks", CastMemberKind::Director),
            ("Gene Wilder", CastMemberKind::Actor),
        ] {
            let member = CastMember::new(name, kind).unwrap();
            gateway.create(&member).await.unwrap();
        }

        let query = SearchQuery::new(0, 10, "gene", "name", SortDirection::Asc);
        let page = gateway.find_all(&query).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name(), "Gene Wilder");
    }

    #[tokio::test]
    async fn test_delete_by_id_is_idempotent() {
        let gateway = InMemoryCastMemberGateway::new();
        let id = CastMemberId::from("never-stored");

        gateway.delete_by_id(&id).await.unwrap();
        gateway.delete_by_id(&id).await.unwrap();
    }
}
