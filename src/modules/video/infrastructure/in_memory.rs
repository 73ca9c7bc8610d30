use async_trait::async_trait;
use dashmap::DashMap;

use crate::modules::video::domain::{Video, VideoGateway, VideoId};
use crate::shared::application::pagination::{Pagination, SearchQuery, SortDirection};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::errors::DomainResult;

/// In-memory video gateway. The search contract matches the other
/// in-memory gateways, with `terms` filtering on the title.
#[derive(Default)]
pub struct InMemoryVideoGateway {
    store: DashMap<VideoId, Video>,
}

impl InMemoryVideoGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn store_snapshot(&self, video: &Video) -> Video {
        let mut snapshot = video.clone();
        snapshot.take_events();
        snapshot
    }
}

#[async_trait]
impl VideoGateway for InMemoryVideoGateway {
    async fn create(&self, video: &Video) -> DomainResult<Video> {
        let snapshot = self.store_snapshot(video);
        self.store.insert(snapshot.id().clone(), snapshot.clone());
        log::debug!("stored video {}", snapshot.id());
        Ok(snapshot)
    }

    async fn update(&self, video: &Video) -> DomainResult<Video> {
        let snapshot = self.store_snapshot(video);
        self.store.insert(snapshot.id().clone(), snapshot.clone());
        Ok(snapshot)
    }

    async fn delete_by_id(&self, id: &VideoId) -> DomainResult<()> {
        self.store.remove(id);
        Ok(())
    }

    async fn find_by_id(&self, id: &VideoId) -> DomainResult<Option<Video>> {
        Ok(self.store.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<Video>> {
        let terms = query.terms.to_lowercase();
        let mut matches: Vec<Video> = self
            .store
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|video| terms.is_empty() || video.title().to_lowercase().contains(&terms))
            .collect();

        matches.sort_by(|a, b| {
            let ordering = match query.sort.as_str() {
                "created_at" => a.created_at().cmp(&b.created_at()),
                "updated_at" => a.updated_at().cmp(&b.updated_at()),
                _ => a.title().to_lowercase().cmp(&b.title().to_lowercase()),
            }
            .then_with(|| a.id().cmp(b.id()));
            match query.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = matches.len() as u64;
        let items: Vec<Video> = matches
            .into_iter()
            .skip(query.offset())
            .take(query.limit())
            .collect();

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }
}
