use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::domain::events::DomainEvent;

use super::category::CategoryId;

/// Domain events recorded by the Category aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum CategoryEvent {
    CategoryCreated {
        category_id: CategoryId,
        occurred_at: DateTime<Utc>,
    },
    CategoryUpdated {
        category_id: CategoryId,
        occurred_at: DateTime<Utc>,
    },
    CategoryDeleted {
        category_id: CategoryId,
        occurred_at: DateTime<Utc>,
    },
}

impl CategoryEvent {
    pub fn created(category_id: &CategoryId) -> Self {
        Self::CategoryCreated {
            category_id: category_id.clone(),
            occurred_at: Utc::now(),
        }
    }

    pub fn updated(category_id: &CategoryId) -> Self {
        Self::CategoryUpdated {
            category_id: category_id.clone(),
            occurred_at: Utc::now(),
        }
    }

    pub fn deleted(category_id: &CategoryId) -> Self {
        Self::CategoryDeleted {
            category_id: category_id.clone(),
            occurred_at: Utc::now(),
        }
    }
}

impl DomainEvent for CategoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::CategoryCreated { .. } => "CategoryCreated",
            Self::CategoryUpdated { .. } => "CategoryUpdated",
            Self::CategoryDeleted { .. } => "CategoryDeleted",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::CategoryCreated { occurred_at, .. }
            | Self::CategoryUpdated { occurred_at, .. }
            | Self::CategoryDeleted { occurred_at, .. } => *occurred_at,
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            Self::CategoryCreated { category_id, .. }
            | Self::CategoryUpdated { category_id, .. }
            | Self::CategoryDeleted { category_id, .. } => category_id.as_str(),
        }
    }
}
