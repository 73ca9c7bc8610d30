use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::genre::domain::Genre;
use crate::shared::domain::aggregate::AggregateRoot;

/// Full genre projection returned to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreOutput {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Genre> for GenreOutput {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id().to_string(),
            name: genre.name().to_string(),
            is_active: genre.is_active(),
            categories: genre
                .categories()
                .iter()
                .map(|category_id| category_id.to_string())
                .collect(),
            created_at: genre.created_at(),
            updated_at: genre.updated_at(),
            deleted_at: genre.deleted_at(),
        }
    }
}
