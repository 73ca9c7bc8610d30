use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::genre::domain::GenreGateway;
use crate::shared::application::pagination::{Pagination, SearchQuery};
use crate::shared::application::use_case::Query;
use crate::shared::errors::DomainResult;

use super::result::GenreListOutput;

/// Query handler for listing genres
pub struct ListGenresHandler {
    genre_gateway: Arc<dyn GenreGateway>,
}

impl ListGenresHandler {
    pub fn new(genre_gateway: Arc<dyn GenreGateway>) -> Self {
        Self { genre_gateway }
    }
}

#[async_trait]
impl Query<SearchQuery, Pagination<GenreListOutput>> for ListGenresHandler {
    async fn execute(&self, query: SearchQuery) -> DomainResult<Pagination<GenreListOutput>> {
        Ok(self
            .genre_gateway
            .find_all(&query)
            .await?
            .map(|genre| GenreListOutput::from(&genre)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::genre::domain::gateway::MockGenreGateway;
    use crate::modules::genre::domain::Genre;

    #[tokio::test]
    async fn test_list_genres_maps_items_and_keeps_metadata() {
        let genre = Genre::new("Action", true).unwrap();

        let mut gateway = MockGenreGateway::new();
        gateway
            .expect_find_all()
            .returning(move |_| Ok(Pagination::new(0, 10, 1, vec![genre.clone()])));

        let handler = ListGenresHandler::new(Arc::new(gateway));
        let page = handler.execute(SearchQuery::default()).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.per_page, 10);
        assert_eq!(page.items[0].name, "Action");
    }
}
