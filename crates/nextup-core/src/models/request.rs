use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Item, Transition};
use crate::errors::{NextupResult, RequestError};

/// A single recommendation request: anchor, candidate pool and transition log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    pub anchor: Option<Item>,
    #[serde(default)]
    pub pool: Vec<Item>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
    /// Reserved for personalization; not used by scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Value>,
}

impl RecommendRequest {
    pub fn new(anchor: Item, pool: Vec<Item>, transitions: Vec<Transition>) -> Self {
        Self {
            anchor: Some(anchor),
            pool,
            transitions,
            user_id: None,
        }
    }

    /// The anchor, or `MissingAnchor`.
    pub fn anchor(&self) -> NextupResult<&Item> {
        self.anchor
            .as_ref()
            .ok_or_else(|| RequestError::MissingAnchor.into())
    }

    /// Parse a JSON request, checking its shape before typed decoding.
    ///
    /// A missing or null anchor, or a pool/transitions field that is not an
    /// array, fails immediately with the matching [`RequestError`].
    pub fn from_json_value(value: &Value) -> NextupResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| malformed("request", "expected a JSON object"))?;

        let anchor = match object.get("anchor") {
            None | Some(Value::Null) => return Err(RequestError::MissingAnchor.into()),
            Some(anchor) => anchor,
        };
        let pool = match object.get("pool") {
            Some(Value::Array(pool)) => pool,
            _ => return Err(RequestError::PoolNotSequence.into()),
        };
        let transitions = match object.get("transitions") {
            Some(Value::Array(transitions)) => transitions,
            _ => return Err(RequestError::TransitionsNotSequence.into()),
        };

        let anchor: Item = decode("anchor", anchor)?;
        let pool = pool
            .iter()
            .enumerate()
            .map(|(i, v)| decode(&format!("pool[{i}]"), v))
            .collect::<NextupResult<Vec<Item>>>()?;
        let transitions = transitions
            .iter()
            .enumerate()
            .map(|(i, v)| decode(&format!("transitions[{i}]"), v))
            .collect::<NextupResult<Vec<Transition>>>()?;

        Ok(Self {
            anchor: Some(anchor),
            pool,
            transitions,
            user_id: object.get("userId").filter(|v| !v.is_null()).cloned(),
        })
    }

    pub fn from_json_str(source: &str) -> NextupResult<Self> {
        let value: Value =
            serde_json::from_str(source).map_err(|e| malformed("request", &e.to_string()))?;
        Self::from_json_value(&value)
    }
}

fn decode<T: serde::de::DeserializeOwned>(field: &str, value: &Value) -> NextupResult<T> {
    T::deserialize(value).map_err(|e| malformed(field, &e.to_string()))
}

fn malformed(field: &str, reason: &str) -> crate::errors::NextupError {
    RequestError::MalformedField {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
