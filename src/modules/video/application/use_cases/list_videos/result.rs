use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::video::domain::Video;
use crate::shared::domain::aggregate::AggregateRoot;

/// One row of a video listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoListOutput {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Video> for VideoListOutput {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id().to_string(),
            title: video.title().to_string(),
            description: video.description().to_string(),
            created_at: video.created_at(),
            updated_at: video.updated_at(),
        }
    }
}
