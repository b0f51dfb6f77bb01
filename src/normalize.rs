//! Recursive reinterpretation of embedded JSON strings.
//!
//! A document value may carry further structure encoded inside string
//! leaves (`'{"a": "b"}'`, `'["x", "y"]'`, `"null"`). [`normalize`] walks
//! the tree and replaces such strings with the structure they encode,
//! repeating until no embedded document remains.

use serde_json::Value;

/// Recursively reinterprets string leaves that contain embedded JSON.
///
/// Strings that parse to an object, array, or `null` are replaced by the
/// parsed value, which is then normalized again so documents nested through
/// several encoding layers unfold completely. Strings that parse to a bare
/// scalar (number, boolean, quoted string) are kept verbatim: reinterpreting
/// `"123"` or `"true"` would silently retype ordinary text. Everything else
/// passes through unchanged, so the function never fails.
#[must_use]
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key, normalize(value)))
                .collect(),
        ),
        Value::String(text) => match parse_embedded(&text) {
            Some(parsed) => normalize(parsed),
            None => Value::String(text),
        },
        scalar => scalar,
    }
}

/// Parses a string as an embedded JSON document.
///
/// Returns `None` when the string is not valid JSON or when it encodes a
/// bare scalar.
fn parse_embedded(text: &str) -> Option<Value> {
    let parsed: Value = serde_json::from_str(text).ok()?;
    match parsed {
        Value::Null | Value::Array(_) | Value::Object(_) => Some(parsed),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
