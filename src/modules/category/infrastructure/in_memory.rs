use async_trait::async_trait;
use dashmap::DashMap;

use crate::modules::category::domain::{Category, CategoryGateway, CategoryId};
use crate::shared::application::pagination::{Pagination, SearchQuery, SortDirection};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::errors::DomainResult;

/// In-memory category gateway.
///
/// Reference implementation of the gateway search contract: `terms` is a
/// case-insensitive substring match on the name, sorting follows the named
/// field (name, created_at, updated_at) with ties broken by id, and
/// `total` counts the full filtered set.
#[derive(Default)]
pub struct InMemoryCategoryGateway {
    store: DashMap<CategoryId, Category>,
}

impl InMemoryCategoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn store_snapshot(&self, category: &Category) -> Category {
        // Pending events stay with the caller, not with the stored copy.
        let mut snapshot = category.clone();
        snapshot.take_events();
        snapshot
    }
}

#[async_trait]
impl CategoryGateway for InMemoryCategoryGateway {
    async fn create(&self, category: &Category) -> DomainResult<Category> {
        let snapshot = self.store_snapshot(category);
        self.store.insert(snapshot.id().clone(), snapshot.clone());
        log::debug!("stored category {}", snapshot.id());
        Ok(snapshot)
    }

    async fn update(&self, category: &Category) -> DomainResult<Category> {
        let snapshot = self.store_snapshot(category);
        self.store.insert(snapshot.id().clone(), snapshot.clone());
        Ok(snapshot)
    }

    async fn delete_by_id(&self, id: &CategoryId) -> DomainResult<()> {
        self.store.remove(id);
        Ok(())
    }

    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.store.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<Category>> {
        let terms = query.terms.to_lowercase();
        let mut matches: Vec<Category> = self
            .store
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|category| terms.is_empty() || category.name().to_lowercase().contains(&terms))
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
        let items: Vec<Category> = matches
            .into_iter()
            .skip(query.offset())
            .take(query.limit())
            .collect();

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }

    async fn exists_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<CategoryId>> {
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

    async fn seeded() -> InMemoryCategoryGateway {
        let gateway = InMemoryCategoryGateway::new();
        for name in ["Movies", "Series", "Documentaries"] {
            let category = Category::new(name, "", true).unwrap();
            gateway.create(&category).await.unwrap();
        }
        gateway
    }

    #[tokio::test]
    async fn test_find_all_filters_case_insensitively() {
        let gateway = seeded().await;
        let query = SearchQuery::new(0, 10, "MOV", "name", SortDirection::Asc);

        let page = gateway.find_all(&query).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name(), "Movies");
    }

    #[tokio::test]
    async fn test_find_all_sorts_by_name_descending() {
        let gateway = seeded().await;
        let query = SearchQuery::new(0, 10, "", "name", SortDirection::Desc);

        let page = gateway.find_all(&query).await.unwrap();

        let names: Vec<&str> = page.items.iter().map(|category| category.name()).collect();
        assert_eq!(names, vec!["Series", "Movies", "Documentaries"]);
    }

    #[tokio::test]
    async fn test_find_all_pages_and_keeps_total() {
        let gateway = seeded().await;
        let query = SearchQuery::new(1, 2, "", "name", SortDirection::Asc);

        let page = gateway.find_all(&query).await.unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name(), "Series");
        assert_eq!(page.current_page, 1);
        assert_eq!(page.per_page, 2);
    }

    #[tokio::test]
    async fn test_delete_by_id_is_a_no_op_for_missing_ids() {
        let gateway = InMemoryCategoryGateway::new();
        let id = CategoryId::from("never-stored");

        gateway.delete_by_id(&id).await.unwrap();
        gateway.delete_by_id(&id).await.unwrap();

        assert!(gateway.find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_exists_by_ids_returns_only_known_ids() {
        let gateway = InMemoryCategoryGateway::new();
        let category = Category::new("Movies", "", true).unwrap();
        gateway.create(&category).await.unwrap();

        let known = category.id().clone();
        let unknown = CategoryId::from("unknown");
        let found = gateway
            .exists_by_ids(&[known.clone(), unknown])
            .await
            .unwrap();

        assert_eq!(found, vec![known]);
    }

    #[tokio::test]
    async fn test_stored_copy_has_no_pending_events() {
        let gateway = InMemoryCategoryGateway::new();
        let category = Category::new("Movies", "", true).unwrap();
        gateway.create(&category).await.unwrap();

        let loaded = gateway.find_by_id(category.id()).await.unwrap().unwrap();
        assert!(loaded.pending_events().is_empty());
    }
}
