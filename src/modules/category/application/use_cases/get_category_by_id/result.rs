use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::category::domain::Category;
use crate::shared::domain::aggregate::AggregateRoot;

/// Full category projection returned to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        }
    }
}
