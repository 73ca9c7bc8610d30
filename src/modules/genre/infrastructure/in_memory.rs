use async_trait::async_trait;
use dashmap::DashMap;

use crate::modules::genre::domain::{Genre, GenreGateway, GenreId};
use crate::shared::application::pagination::{Pagination, SearchQuery, SortDirection};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::errors::DomainResult;

/// In-memory genre gateway with the same search contract as the category
/// one: case-insensitive substring filter on the name, field sort with id
/// tie-break, offset/limit paging.
#[derive(Default)]
pub struct InMemoryGenreGateway {
    store: DashMap<GenreId, Genre>,
}

impl InMemoryGenreGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn store_snapshot(&self, genre: &Genre) -> Genre {
        let mut snapshot = genre.clone();
        snapshot.take_events();
        snapshot
    }
}

#[async_trait]
impl GenreGateway for InMemoryGenreGateway {
    async fn create(&self, genre: &Genre) -> DomainResult<Genre> {
        let snapshot = self.store_snapshot(genre);
        self.store.insert(snapshot.id().clone(), snapshot.clone());
        log::debug!("stored genre {}", snapshot.id());
        Ok(snapshot)
    }

    async fn update(&self, genre: &Genre) -> DomainResult<Genre> {
        let snapshot = self.store_snapshot(genre);
        self.store.insert(snapshot.id().clone(), snapshot.clone());
        Ok(snapshot)
    }

    async fn delete_by_id(&self, id: &GenreId) -> DomainResult<()> {
        self.store.remove(id);
        Ok(())
    }

    async fn find_by_id(&self, id: &GenreId) -> DomainResult<Option<Genre>> {
        Ok(self.store.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<Genre>> {
        let terms = query.terms.to_lowercase();
        let mut matches: Vec<Genre> = self
            .store
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|genre| terms.is_empty() || genre.name().to_lowercase().contains(&terms))
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
        let items: Vec<Genre> = matches
            .into_iter()
            .skip(query.offset())
            .take(query.limit())
            .collect();

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }

    async fn exists_by_ids(&self, ids: &[GenreId]) -> DomainResult<Vec<GenreId>> {
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

    #[tokio::test]
    async fn test_find_all_filters_and_pages() {
        let gateway = InMemoryGenreGateway::new();
        for name in ["Action", "Adventure", "Drama"] {
            let genre = Genre::new(name, true).unwrap();
            gateway.create(&genre).await.unwrap();
        }

        let query = SearchQuery::new(0, 10, "a", "name", SortDirection::Asc);
        let page = gateway.find_all(&query).await.unwrap();

        // All three contain an "a" somewhere.
        assert_eq!(page.total, 3);
        let names: Vec<&str> = page.items.iter().map(|genre| genre.name()).collect();
        assert_eq!(names, vec!["Action", "Adventure", "Drama"]);
    }

    #[tokio::test]
    async fn test_delete_by_id_twice_stays_silent() {
        let gateway = InMemoryGenreGateway::new();
        let genre = Genre::new("Action", true).unwrap();
        gateway.create(&genre).await.unwrap();

        gateway.delete_by_id(genre.id()).await.unwrap();
        gateway.delete_by_id(genre.id()).await.unwrap();

        assert!(gateway.find_by_id(genre.id()).await.unwrap().is_none());
    }
}
