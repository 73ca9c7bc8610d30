use serde::{Deserialize, Serialize};

use crate::modules::video::domain::Video;
use crate::shared::domain::aggregate::AggregateRoot;

/// Result of creating a new video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVideoOutput {
    pub id: String,
}

impl From<&Video> for CreateVideoOutput {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id().to_string(),
        }
    }
}
