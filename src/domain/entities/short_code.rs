//! Short code identifying a stored scenario link.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Public-facing identifier used as the last path segment of a short URL.
///
/// Generated codes are 6 alphanumeric characters (see
/// [`crate::utils::code_generator`]), but codes received from clients are
/// accepted as-is: an unknown shape simply resolves to "not found".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ShortCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ShortCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
