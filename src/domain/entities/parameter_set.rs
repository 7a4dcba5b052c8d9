//! Calculator parameters and comparison scenarios carried by a short link.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::domain::errors::ValidationError;

/// Parameter keys understood by the calculator, in the order they are encoded.
pub const PARAMETER_KEYS: [&str; 11] = [
    "term",
    "servers",
    "unitCost",
    "residual",
    "hourlyRate",
    "decay",
    "utilization",
    "marketRake",
    "providerRake",
    "siliconFee",
    "taxRate",
];

/// Known calculator parameters with their scalar values.
///
/// Unknown keys and `null` values are dropped on construction. Values are
/// not type-checked: whatever scalar the client sent is rendered verbatim
/// into the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    values: HashMap<&'static str, Value>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a parameter set from a request payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidParameters`] unless `value` is a JSON
    /// object or array. An array carries no named keys and yields an empty set.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            Value::Array(_) => Ok(Self::new()),
            _ => Err(ValidationError::InvalidParameters),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let mut set = Self::new();
        for (key, value) in map {
            set.insert(key, value.clone());
        }
        set
    }

    /// Sets a parameter. Returns `false` when the key is not a known parameter
    /// or the value is `null`; the set is unchanged in that case.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) -> bool {
        let value = value.into();
        let Some(known) = PARAMETER_KEYS.iter().find(|k| **k == key) else {
            return false;
        };
        if value.is_null() {
            return false;
        }
        self.values.insert(*known, value);
        true
    }

    /// Builder-style [`Self::insert`].
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over present parameters in declared key order, rendering each
    /// value the way a browser query builder would.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        PARAMETER_KEYS
            .iter()
            .filter_map(|key| self.values.get(key).map(|value| (*key, render_scalar(value))))
    }
}

/// Renders a JSON value as query-string text.
///
/// Numbers follow JavaScript `Number#toString`, arrays are comma-joined and
/// objects collapse to `[object Object]`.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return n.to_string();
            }
            n.as_f64().map_or_else(|| n.to_string(), render_float)
        }
        Value::Array(items) => items
            .iter()
            .map(render_scalar)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Shortest round-trip digits; plain decimal for magnitudes in `[1e-6, 1e21)`,
/// exponent form (`1e+21`, `1.5e-7`) outside it.
fn render_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&f.abs()) {
        return f.to_string();
    }

    let exp = format!("{f:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// Ordered comparison scenarios. Each scenario is opaque to this service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioList(Vec<Value>);

impl ScenarioList {
    pub fn new(scenarios: Vec<Value>) -> Self {
        Self(scenarios)
    }

    /// Normalises the optional `scenarios` request field.
    ///
    /// Anything other than an array (absent, `null`, an object) is treated as
    /// an empty list.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Array(items)) => Self(items.clone()),
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert_eq!(
            ParameterSet::from_json(&Value::Null),
            Err(ValidationError::InvalidParameters)
        );
        assert_eq!(
            ParameterSet::from_json(&json!("string")),
            Err(ValidationError::InvalidParameters)
        );
        assert_eq!(
            ParameterSet::from_json(&json!(42)),
            Err(ValidationError::InvalidParameters)
        );
    }

    #[test]
    fn test_from_json_accepts_array_as_empty() {
        assert_eq!(ParameterSet::from_json(&json!([])), Ok(ParameterSet::new()));
        assert!(ParameterSet::from_json(&json!([1, 2])).unwrap().is_empty());
    }

    #[test]
    fn test_from_json_drops_unknown_keys_and_nulls() {
        let set = ParameterSet::from_json(&json!({
            "term": 36,
            "bogus": 1,
            "decay": null
        }))
        .unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("term"), Some(&json!(36)));
        assert!(set.get("bogus").is_none());
        assert!(set.get("decay").is_none());
    }

    #[test]
    fn test_iter_follows_declared_order() {
        let set = ParameterSet::from_json(&json!({
            "taxRate": 0.2,
            "servers": 2,
            "term": 5,
        }))
        .unwrap();

        let keys: Vec<_> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["term", "servers", "taxRate"]);
    }

    #[test]
    fn test_render_scalar_matches_browser_stringification() {
        assert_eq!(render_scalar(&json!(5)), "5");
        assert_eq!(render_scalar(&json!(-3)), "-3");
        assert_eq!(render_scalar(&json!(5.0)), "5");
        assert_eq!(render_scalar(&json!(0.25)), "0.25");
        assert_eq!(render_scalar(&json!(true)), "true");
        assert_eq!(render_scalar(&json!("abc")), "abc");
        assert_eq!(render_scalar(&json!([1, "b", null])), "1,b,");
        assert_eq!(render_scalar(&json!({"x": 1})), "[object Object]");
    }

    #[test]
    fn test_render_float_exponent_forms() {
        assert_eq!(render_float(1e21), "1e+21");
        assert_eq!(render_float(1.5e300), "1.5e+300");
        assert_eq!(render_float(1e-7), "1e-7");
        assert_eq!(render_float(-2.5e-8), "-2.5e-8");
        assert_eq!(render_float(0.000001), "0.000001");
        assert_eq!(render_float(123456789.5), "123456789.5");
        assert_eq!(render_float(1e20), "100000000000000000000");
        assert_eq!(render_float(-0.0), "0");
        assert_eq!(render_float(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_insert_ignores_unknown_key() {
        let mut set = ParameterSet::new();
        assert!(!set.insert("unknown", 1));
        assert!(set.insert("residual", 0.1));
        assert!(!set.insert("term", Value::Null));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_scenarios_from_json() {
        assert!(ScenarioList::from_json(None).is_empty());
        assert!(ScenarioList::from_json(Some(&Value::Null)).is_empty());
        assert!(ScenarioList::from_json(Some(&json!({"a": 1}))).is_empty());

        let list = ScenarioList::from_json(Some(&json!([{"a": 1}, {"b": 2}])));
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[1], json!({"b": 2}));
    }
}
