use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::genre::domain::Genre;
use crate::shared::domain::aggregate::AggregateRoot;

/// One row of a genre listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreListOutput {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Genre> for GenreListOutput {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id().to_string(),
            name: genre.name().to_string(),
            is_active: genre.is_active(),
            created_at: genre.created_at(),
            deleted_at: genre.deleted_at(),
        }
    }
}
