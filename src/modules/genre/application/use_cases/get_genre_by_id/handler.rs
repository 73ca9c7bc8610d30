use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::genre::domain::{Genre, GenreGateway, GenreId};
use crate::shared::application::use_case::Query;
use crate::shared::errors::{DomainError, DomainResult};

use super::{query::GetGenreByIdQuery, result::GenreOutput};

/// Query handler for fetching one genre by id
pub struct GetGenreByIdHandler {
    genre_gateway: Arc<dyn GenreGateway>,
}

impl GetGenreByIdHandler {
    pub fn new(genre_gateway: Arc<dyn GenreGateway>) -> Self {
        Self { genre_gateway }
    }
}

#[async_trait]
impl Query<GetGenreByIdQuery, GenreOutput> for GetGenreByIdHandler {
    async fn execute(&self, query: GetGenreByIdQuery) -> DomainResult<GenreOutput> {
        let id = GenreId::from(query.id.as_str());
        self.genre_gateway
            .find_by_id(&id)
            .await?
            .map(|genre| GenreOutput::from(&genre))
            .ok_or_else(|| DomainError::not_found(Genre::AGGREGATE_NAME, query.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::domain::aggregate::AggregateRoot;
    use crate::modules::category::domain::CategoryId;
    use crate::modules::genre::domain::gateway::MockGenreGateway;

    #[tokio::test]
    async fn test_get_genre_by_id_returns_the_projection() {
        let mut existing = Genre::new("Action", true).unwrap();
        existing.add_category(CategoryId::from("cat-1"));
        let id = existing.id().to_string();

        let mut gateway = MockGenreGateway::new();
        let found = existing.clone();
        gateway
            .expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));

        let handler = GetGenreByIdHandler::new(Arc::new(gateway));
        let output = handler.execute(GetGenreByIdQuery::new(id.as_str())).await.unwrap();

        assert_eq!(output.id, id);
        assert_eq!(output.name, "Action");
        assert_eq!(output.categories, vec!["cat-1"]);
    }

    #[tokio::test]
    async fn test_get_genre_by_id_with_unknown_id_is_not_found() {
        let mut gateway = MockGenreGateway::new();
        gateway.expect_find_by_id().returning(|_| Ok(None));

        let handler = GetGenreByIdHandler::new(Arc::new(gateway));
        let error = handler
            .execute(GetGenreByIdQuery::new("missing-id"))
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "Genre with ID missing-id was not found");
    }
}
