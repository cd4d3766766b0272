use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ItemId;

/// Pre-aggregated "viewed `from`, then `to`" observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub from: ItemId,
    pub to: ItemId,
    pub count: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Transition {
    pub fn new(
        from: i64,
        to: i64,
        count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            from: ItemId(from),
            to: ItemId(to),
            count,
            created_at,
            updated_at: None,
        }
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Last-updated time, falling back to creation time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}
