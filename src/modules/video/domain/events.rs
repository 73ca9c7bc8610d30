use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::domain::events::DomainEvent;

use super::video::VideoId;

/// Domain events recorded by the Video aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum VideoEvent {
    VideoCreated {
        video_id: VideoId,
        occurred_at: DateTime<Utc>,
    },
    VideoUpdated {
        video_id: VideoId,
        occurred_at: DateTime<Utc>,
    },
    VideoDeleted {
        video_id: VideoId,
        occurred_at: DateTime<Utc>,
    },
}

impl VideoEvent {
    pub fn created(video_id: &VideoId) -> Self {
        Self::VideoCreated {
            video_id: video_id.clone(),
            occurred_at: Utc::now(),
        }
    }

    pub fn updated(video_id: &VideoId) -> Self {
        Self::VideoUpdated {
            video_id: video_id.clone(),
            occurred_at: Utc::now(),
        }
    }

    pub fn deleted(video_id: &VideoId) -> Self {
        Self::VideoDeleted {
            video_id: video_id.clone(),
            occurred_at: Utc::now(),
        }
    }
}

impl DomainEvent for VideoEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::VideoCreated { .. } => "VideoCreated",
            Self::VideoUpdated { .. } => "VideoUpdated",
            Self::VideoDeleted { .. } => "VideoDeleted",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::VideoCreated { occurred_at, .. }
            | Self::VideoUpdated { occurred_at, .. }
            | Self::VideoDeleted { occurred_at, .. } => *occurred_at,
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            Self::VideoCreated { video_id, .. }
            | Self::VideoUpdated { video_id, .. }
            | Self::VideoDeleted { video_id, .. } => video_id.as_str(),
        }
    }
}
