use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque, comparable item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A content item, either the anchor or a pool candidate.
///
/// Items are a caller-owned snapshot; the engine only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    /// Lineage family. `None` or empty means the item belongs to no family.
    #[serde(default)]
    pub family_id: Option<String>,
    /// Direct parent, used for lineage when family ids are absent.
    #[serde(default)]
    pub parent_id: Option<ItemId>,
    pub creator_id: String,
    pub provider: String,
    pub method: String,
    pub created_at: DateTime<Utc>,
    /// Absent means active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl Item {
    /// Build an active item with no lineage links.
    pub fn new(
        id: i64,
        creator_id: impl Into<String>,
        provider: impl Into<String>,
        method: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ItemId(id),
            family_id: None,
            parent_id: None,
            creator_id: creator_id.into(),
            provider: provider.into(),
            method: method.into(),
            created_at,
            active: None,
        }
    }

    pub fn with_family(mut self, family_id: impl Into<String>) -> Self {
        self.family_id = Some(family_id.into());
        self
    }

    pub fn with_parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(ItemId(parent_id));
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Only an explicit `false` marks an item inactive.
    pub fn is_active(&self) -> bool {
        self.active != Some(false)
    }

    /// Non-empty family id, if any.
    pub fn family(&self) -> Option<&str> {
        self.family_id.as_deref().filter(|f| !f.is_empty())
    }

    /// Shared non-empty family, or a direct parent/child link in either direction.
    pub fn shares_lineage_with(&self, other: &Item) -> bool {
        if let (Some(a), Some(b)) = (self.family(), other.family()) {
            if a == b {
                return true;
            }
        }
        self.parent_id == Some(other.id) || other.parent_id == Some(self.id)
    }

    /// Same (provider, method) pair.
    pub fn same_server_method(&self, other: &Item) -> bool {
        self.provider == other.provider && self.method == other.method
    }
}
