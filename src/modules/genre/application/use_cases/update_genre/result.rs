use serde::{Deserialize, Serialize};

use crate::modules::genre::domain::Genre;
use crate::shared::domain::aggregate::AggregateRoot;

/// Result of updating a genre
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGenreOutput {
    pub id: String,
}

impl From<&Genre> for UpdateGenreOutput {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id().to_string(),
        }
    }
}
