use serde::{Deserialize, Serialize};

use crate::modules::category::domain::Category;
use crate::shared::domain::aggregate::AggregateRoot;

/// Result of creating a new category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryOutput {
    pub id: String,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().to_string(),
        }
    }
}
