use std::fmt;

use serde::{Deserialize, Serialize};

use super::ItemId;

/// Signal that contributed to a candidate's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Reason {
    Lineage,
    SameCreator,
    SameServerMethod,
    ClickNext,
    Fallback,
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lineage => "lineage",
            Self::SameCreator => "sameCreator",
            Self::SameServerMethod => "sameServerMethod",
            Self::ClickNext => "clickNext",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the ranked output batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: ItemId,
    /// Rounded to two decimal places.
    pub score: f64,
    pub reasons: Vec<Reason>,
}
