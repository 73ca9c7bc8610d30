use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::domain::{Category, CategoryGateway, CategoryId};
use crate::shared::application::use_case::Query;
use crate::shared::errors::{DomainError, DomainResult};

use super::{query::GetCategoryByIdQuery, result::CategoryOutput};

/// Query handler for fetching one category by id
pub struct GetCategoryByIdHandler {
    category_gateway: Arc<dyn CategoryGateway>,
}

impl GetCategoryByIdHandler {
    pub fn new(category_gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { category_gateway }
    }
}

#[async_trait]
impl Query<GetCategoryByIdQuery, CategoryOutput> for GetCategoryByIdHandler {
    async fn execute(&self, query: GetCategoryByIdQuery) -> DomainResult<CategoryOutput> {
        let id = CategoryId::from(query.id.as_str());
        self.category_gateway
            .find_by_id(&id)
            .await?
            .map(|category| CategoryOutput::from(&category))
            .ok_or_else(|| DomainError::not_found(Category::AGGREGATE_NAME, query.id))
    }
}
