use serde::{Deserialize, Serialize};

use crate::modules::genre::domain::Genre;
use crate::shared::domain::aggregate::AggregateRoot;

/// Result of creating a new genre
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGenreOutput {
    pub id: String,
}

impl From<&Genre> for CreateGenreOutput {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id().to_string(),
        }
    }
}
