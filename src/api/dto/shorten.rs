//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to shorten the current calculator state.
///
/// Both fields are kept as raw JSON: `params` is validated by the registry
/// (must be an object), and `scenarios` is ignored unless it is an array.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub params: Value,

    #[serde(default)]
    pub scenarios: Option<Value>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortURL")]
    pub short_url: String,

    #[serde(rename = "shortCode")]
    pub short_code: String,
}
