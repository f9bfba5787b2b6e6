//! The `Info` payload returned by the local API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::client::FetchError;

/// Loosely-typed key-value mapping. Only `slogan` is read by the page; every
/// other key is kept so callers can inspect it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Info(Map<String, Value>);

impl Info {
    /// Parse a response body. Anything but a JSON object is a decode failure.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        serde_json::from_str(body).map_err(|err| FetchError::Decode(err.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The slogan, or `""` when it is absent, null or not a string.
    pub fn slogan(&self) -> &str {
        self.get("slogan").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
