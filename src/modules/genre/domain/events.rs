use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::domain::events::DomainEvent;

use super::genre::GenreId;

/// Domain events recorded by the Genre aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum GenreEvent {
    GenreCreated {
        genre_id: GenreId,
        occurred_at: DateTime<Utc>,
    },
    GenreUpdated {
        genre_id: GenreId,
        occurred_at: DateTime<Utc>,
    },
    GenreDeleted {
        genre_id: GenreId,
        occurred_at: DateTime<Utc>,
    },
}

impl GenreEvent {
    pub fn created(genre_id: &GenreId) -> Self {
        Self::GenreCreated {
            genre_id: genre_id.clone(),
            occurred_at: Utc::now(),
        }
    }

    pub fn updated(genre_id: &GenreId) -> Self {
        Self::GenreUpdated {
            genre_id: genre_id.clone(),
            occurred_at: Utc::now(),
        }
    }

    pub fn deleted(genre_id: &GenreId) -> Self {
        Self::GenreDeleted {
            genre_id: genre_id.clone(),
            occurred_at: Utc::now(),
        }
    }
}

impl DomainEvent for GenreEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::GenreCreated { .. } => "GenreCreated",
            Self::GenreUpdated { .. } => "GenreUpdated",
            Self::GenreDeleted { .. } => "GenreDeleted",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::GenreCreated { occurred_at, .. }
            | Self::GenreUpdated { occurred_at, .. }
            | Self::GenreDeleted { occurred_at, .. } => *occurred_at,
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            Self::GenreCreated { genre_id, .. }
            | Self::GenreUpdated { genre_id, .. }
            | Self::GenreDeleted { genre_id, .. } => genre_id.as_str(),
        }
    }
}
