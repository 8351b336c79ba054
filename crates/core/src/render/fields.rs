//! Config accessors used by the generators.
//!
//! Config values are untyped JSON, so every generator reads them through
//! these helpers: scalars are coerced to text, `null` counts as absent.

use serde_json::Value;

use crate::types::Config;

/// Coerce a scalar JSON value to text. Lists, maps and `null` yield `None`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text value of `key`, or `default` when the key is absent or not a scalar.
pub fn text_or(config: &Config, key: &str, default: &str) -> String {
    config
        .get(key)
        .and_then(scalar_text)
        .unwrap_or_else(|| default.to_string())
}

/// Text value of `key` when present and non-empty.
pub fn non_empty(config: &Config, key: &str) -> Option<String> {
    config
        .get(key)
        .and_then(scalar_text)
        .filter(|s| !s.is_empty())
}

/// The list stored under `key`, or an empty slice.
pub fn list<'a>(config: &'a Config, key: &str) -> &'a [Value] {
    match config.get(key) {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

/// Non-empty text field of a list element that is itself an object.
pub fn item_text(item: &Value, key: &str) -> Option<String> {
    item.get(key)
        .and_then(scalar_text)
        .filter(|s| !s.is_empty())
}
