use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::category::domain::Category;
use crate::shared::domain::aggregate::AggregateRoot;

/// One row of a category listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListOutput {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryListOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
            deleted_at: category.deleted_at(),
        }
    }
}
