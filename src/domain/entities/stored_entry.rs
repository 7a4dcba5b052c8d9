//! Persisted value behind a short code.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ScenarioList;
use crate::domain::errors::StoreError;

/// Canonical stored record: the pre-encoded query suffix plus the scenarios it
/// was built from.
///
/// Entries are immutable once written. A colliding code overwrites the whole
/// entry, never a field of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEntry {
    /// Query-string suffix beginning with `?`.
    pub url: String,
    #[serde(default)]
    pub scenarios: ScenarioList,
}

impl StoredEntry {
    pub fn new(url: impl Into<String>, scenarios: ScenarioList) -> Self {
        Self {
            url: url.into(),
            scenarios,
        }
    }

    /// Serializes the entry for the durable backend.
    pub fn encode(&self) -> Result<String, StoreError> {
        serde_json::to_string(self).map_err(|e| StoreError::Encode(e.to_string()))
    }

    /// Decodes a raw durable-backend value into the canonical shape.
    ///
    /// Accepts the structured `{url, scenarios}` object, a JSON string holding
    /// only the URL, or an unquoted URL written by older deployments.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] if the value is valid JSON of any other shape.
    pub fn decode(raw: &str) -> Result<Self, StoreError> {
        match serde_json::from_str::<StoredValue>(raw) {
            Ok(value) => Ok(value.into()),
            Err(_) if raw.starts_with('?') => Ok(Self::new(raw, ScenarioList::default())),
            Err(e) => Err(StoreError::Decode(e.to_string())),
        }
    }
}

/// Shapes a value may take in the durable backend.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    Structured(StoredEntry),
    BareUrl(String),
}

impl From<StoredValue> for StoredEntry {
    fn from(value: StoredValue) -> Self {
        match value {
            StoredValue::Structured(entry) => entry,
            StoredValue::BareUrl(url) => StoredEntry::new(url, ScenarioList::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_shape() {
        let entry = StoredEntry::new("?term=5", ScenarioList::new(vec![json!({"a": 1})]));
        let encoded = entry.encode().unwrap();
        assert_eq!(encoded, r#"{"url":"?term=5","scenarios":[{"a":1}]}"#);
    }

    #[test]
    fn test_decode_structured() {
        let entry = StoredEntry::decode(r#"{"url":"?term=5","scenarios":[{"a":1}]}"#).unwrap();
        assert_eq!(entry.url, "?term=5");
        assert_eq!(entry.scenarios.len(), 1);
    }

    #[test]
    fn test_decode_structured_without_scenarios() {
        let entry = StoredEntry::decode(r#"{"url":"?servers=2"}"#).unwrap();
        assert_eq!(entry.url, "?servers=2");
        assert!(entry.scenarios.is_empty());
    }

    #[test]
    fn test_decode_json_string() {
        let entry = StoredEntry::decode(r#""?term=5""#).unwrap();
        assert_eq!(entry, StoredEntry::new("?term=5", ScenarioList::default()));
    }

    #[test]
    fn test_decode_raw_string() {
        let entry = StoredEntry::decode("?term=5&servers=2").unwrap();
        assert_eq!(entry.url, "?term=5&servers=2");
        assert!(entry.scenarios.is_empty());
    }

    #[test]
    fn test_decode_rejects_unknown_shape() {
        assert!(matches!(
            StoredEntry::decode(r#"{"nope":true}"#),
            Err(StoreError::Decode(_))
        ));
        assert!(matches!(StoredEntry::decode("42"), Err(StoreError::Decode(_))));
    }
}
