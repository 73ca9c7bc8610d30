use serde::{Deserialize, Serialize};

use crate::modules::video::domain::Video;
use crate::shared::domain::aggregate::AggregateRoot;

/// Result of updating a video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVideoOutput {
    pub id: String,
}

impl From<&Video> for UpdateVideoOutput {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id().to_string(),
        }
    }
}
