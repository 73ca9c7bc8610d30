use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::domain::CategoryGateway;
use crate::shared::application::pagination::{Pagination, SearchQuery};
use crate::shared::application::use_case::Query;
use crate::shared::errors::DomainResult;

use super::result::CategoryListOutput;

/// Query handler for listing categories
pub struct ListCategoriesHandler {
    category_gateway: Arc<dyn CategoryGateway>,
}

impl ListCategoriesHandler {
    pub fn new(category_gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { category_gateway }
    }
}

#[async_trait]
impl Query<SearchQuery, Pagination<CategoryListOutput>> for ListCategoriesHandler {
    async fn execute(&self, query: SearchQuery) -> DomainResult<Pagination<CategoryListOutput>> {
        // Filtering, sorting and counting already happened behind the
        // gateway; only the items change shape here.
        Ok(self
            .category_gateway
            .find_all(&query)
            .await?
            .map(|category| CategoryListOutput::from(&category)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::domain::gateway::MockCategoryGateway;
    use crate::modules::category::domain::Category;

    #[tokio::test]
    async fn test_list_categories_maps_items_and_keeps_metadata() {
        let first = Category::new("Documentaries", "", true).unwrap();
        let second = Category::new("Movies", "", true).unwrap();
        let expected_names: Vec<String> =
            vec![first.name().to_string(), second.name().to_string()];

        let mut gateway = MockCategoryGateway::new();
        gateway.expect_find_all().returning(move |_| {
            Ok(Pagination::new(
                0,
                10,
                2,
                vec![first.clone(), second.clone()],
            ))
        });

        let handler = ListCategoriesHandler::new(Arc::new(gateway));
        let page = handler.execute(SearchQuery::default()).await.unwrap();

        assert_eq!(page.current_page, 0);
        assert_eq!(page.per_page, 10);
        assert_eq!(page.total, 2);
        let names: Vec<String> = page.items.iter().map(|item| item.name.clone()).collect();
        assert_eq!(names, expected_names);
    }

    #[tokio::test]
    async fn test_list_categories_with_empty_result() {
        let mut gateway = MockCategoryGateway::new();
        gateway
            .expect_find_all()
            .returning(|_| Ok(Pagination::new(0, 10, 0, Vec::new())));

        let handler = ListCategoriesHandler::new(Arc::new(gateway));
        let page = handler.execute(SearchQuery::default()).await.unwrap();

        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }
}
