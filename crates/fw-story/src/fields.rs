//! Optional-with-default field access on loosely typed JSON objects.

use serde_json::{Map, Value};

/// Read `key` as a string.
///
/// Strings are returned as-is, numbers and booleans are stringified.
/// Missing keys, `null`, arrays and objects are absent.
pub(crate) fn opt_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Read `key` as a string, falling back to `default` when absent.
pub(crate) fn string_or(obj: &Map<String, Value>, key: &str, default: &str) -> String {
    opt_string(obj, key).unwrap_or_else(|| default.to_owned())
}

/// Read `key` as a string, treating the empty string as absent.
pub(crate) fn non_empty(obj: &Map<String, Value>, key: &str) -> Option<String> {
    opt_string(obj, key).filter(|s| !s.is_empty())
}
