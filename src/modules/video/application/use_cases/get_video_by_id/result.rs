use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::video::domain::Video;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::identifier::Identifier;

/// Full video projection returned to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoOutput {
    pub id: String,
    pub title: String,
    pub description: String,
    pub launched_at: i32,
    pub duration: f64,
    pub rating: String,
    pub opened: bool,
    pub published: bool,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub cast_members: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn id_strings<I: Identifier>(ids: &[I]) -> Vec<String> {
    ids.iter().map(|id| id.value().to_string()).collect()
}

impl From<&Video> for VideoOutput {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id().to_string(),
            title: video.title().to_string(),
            description: video.description().to_string(),
            launched_at: video.launched_at(),
            duration: video.duration(),
            rating: video.rating().label().to_string(),
            opened: video.is_opened(),
            published: video.is_published(),
            categories: id_strings(video.categories()),
            genres: id_strings(video.genres()),
            cast_members: id_strings(video.cast_members()),
            created_at: video.created_at(),
            updated_at: video.updated_at(),
        }
    }
}
