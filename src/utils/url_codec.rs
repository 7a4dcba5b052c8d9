//! Query-string encoding of calculator state.

use crate::domain::entities::{ParameterSet, ScenarioList};
use url::form_urlencoded;

/// Builds the `?`-prefixed query suffix for a parameter set.
///
/// Parameters appear in declared key order with form-urlencoding (spaces
/// become `+`). A non-empty scenario list is appended as a single
/// `scenarios=<JSON array>` pair. The result is stored as-is and appended to
/// the site URL at redirect time, so it is never decoded by this service.
///
/// # Examples
///
/// ```
/// use scenario_shortener::domain::entities::{ParameterSet, ScenarioList};
/// use scenario_shortener::utils::url_codec::encode;
///
/// let params = ParameterSet::new().with("servers", 2).with("term", 5);
/// assert_eq!(encode(&params, &ScenarioList::default()), "?term=5&servers=2");
/// ```
pub fn encode(params: &ParameterSet, scenarios: &ScenarioList) -> String {
    // Start position 1: the leading `?` is not a pair, so no `&` follows it.
    let mut query = form_urlencoded::Serializer::for_suffix(String::from("?"), 1);

    for (key, value) in params.iter() {
        query.append_pair(key, &value);
    }

    if !scenarios.is_empty() {
        // Serializing a Vec<Value> cannot fail.
        let json = serde_json::to_string(scenarios.as_slice()).unwrap_or_default();
        query.append_pair("scenarios", &json);
    }

    query.finish()
}
