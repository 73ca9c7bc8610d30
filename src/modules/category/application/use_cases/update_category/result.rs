use serde::{Deserialize, Serialize};

use crate::modules::category::domain::Category;
use crate::shared::domain::aggregate::AggregateRoot;

/// Result of updating a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategoryOutput {
    pub id: String,
}

impl From<&Category> for UpdateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().to_string(),
        }
    }
}
