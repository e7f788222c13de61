//! Cache Key Module
//!
//! Builds deterministic cache keys from request parameters.

use serde_json::{Map, Value};

/// Separator between `name:value` pairs.
pub const KEY_PAIR_DELIMITER: &str = "|";

// == Generate Key ==
/// Builds `prefix:name1:value1|name2:value2|...` from a flat parameter map.
///
/// Parameter names are sorted lexicographically and each value is rendered
/// as compact JSON, so maps with the same contents produce the same key
/// regardless of insertion order.
pub fn generate_key(prefix: &str, params: &Map<String, Value>) -> String {
    let mut sorted: Vec<(&String, &Value)> = params.iter().collect();
    sorted.sort_by(|(a, _), (b, _)| a.cmp(b));

    let pairs: Vec<String> = sorted
        .into_iter()
        .map(|(name, value)| format!("{}:{}", name, value))
        .collect();

    format!("{}:{}", prefix, pairs.join(KEY_PAIR_DELIMITER))
}

// == Search Detection ==
/// Returns true when the params carry a non-empty `search` string, either
/// at the top level or inside a `filters` object.
pub fn has_search_term(params: &Map<String, Value>) -> bool {
    let non_empty = |value: Option<&Value>| {
        value
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty())
    };

    non_empty(params.get("search"))
        || non_empty(
            params
                .get("filters")
                .and_then(Value::as_object)
                .and_then(|filters| filters.get("search")),
        )
}
