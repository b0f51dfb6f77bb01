//! Document loading.
//!
//! Reads an input file into the structured value model. The parser is picked
//! by extension: a case-insensitive `.json` suffix selects strict JSON,
//! anything else is parsed as YAML and converted into the same model.

use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;

/// Loads a JSON or YAML document from `path`.
///
/// # Errors
///
/// Returns [`LoadError`] when the file cannot be read or does not parse;
/// callers treat that as "not loaded" rather than a fault.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    // Handle UTF-8 BOM
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    if has_json_extension(path) {
        serde_json::from_str(text).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            line: Some(e.line()),
            message: e.to_string(),
        })
    } else {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| LoadError::Parse {
                path: path.to_path_buf(),
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;
        Ok(yaml_to_json(&yaml))
    }
}

/// True when the path carries a `.json` extension, in any casing.
fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Converts a `serde_yaml::Value` into the JSON value model.
///
/// Scalar mapping keys are coerced to their textual form so that a document
/// like `1: x` still renders a heading; keys that are themselves mappings or
/// sequences have no heading form and their entries are dropped.
#[allow(clippy::option_if_let_else)]
fn yaml_to_json(yaml: &serde_yaml::Value) -> Value {
    match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(*b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number)
            } else {
                Value::Null
            }
        }
        serde_yaml::Value::String(s) => Value::String(s.clone()),
        serde_yaml::Value::Sequence(seq) => Value::Array(seq.iter().map(yaml_to_json).collect()),
        serde_yaml::Value::Mapping(map) => Value::Object(
            map.iter()
                .filter_map(|(k, v)| key_text(k).map(|key| (key, yaml_to_json(v))))
                .collect(),
        ),
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

/// Textual form of a scalar YAML mapping key.
fn key_text(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::Null => Some("null".to_owned()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_loads_json_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.json", r#"{"key1": "value1", "key2": 2}"#);
        let doc = load_document(&path).unwrap();
        assert_eq!(doc, json!({ "key1": "value1", "key2": 2 }));
    }

    #[test]
    fn test_json_extension_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.JSON", r#"[1, 2, 3]"#);
        let doc = load_document(&path).unwrap();
        assert_eq!(doc, json!([1, 2, 3]));
    }

    #[test]
    fn test_loads_yaml_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.yaml", "key1: value1\nkey2:\n  - a\n  - b\n");
        let doc = load_document(&path).unwrap();
        assert_eq!(doc, json!({ "key1": "value1", "key2": ["a", "b"] }));
    }

    #[test]
    fn test_extensionless_file_is_parsed_as_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc", "key: value\n");
        let doc = load_document(&path).unwrap();
        assert_eq!(doc, json!({ "key": "value" }));
    }

    #[test]
    fn test_yaml_preserves_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.yml", "zebra: 1\nalpha: 2\nmiddle: 3\n");
        let doc = load_document(&path).unwrap();
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zebra", "alpha", "middle"]);
    }

    #[test]
    fn test_scalar_yaml_keys_become_heading_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.yaml", "1: one\ntrue: yes-value\n");
        let doc = load_document(&path).unwrap();
        let entries = doc.as_object().unwrap();
        assert_eq!(entries.get("1"), Some(&json!("one")));
        assert_eq!(entries.get("true"), Some(&json!("yes-value")));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let err = load_document(Path::new("/nonexistent/structmd-test.json")).unwrap_err();
        assert!(matches!(err, LoadError::Unreadable { .. }));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.json", "{ not json");
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.yaml", "key: [unclosed\n  - broken");
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_bom_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.json", "\u{feff}{\"key\": 1}");
        let doc = load_document(&path).unwrap();
        assert_eq!(doc, json!({ "key": 1 }));
    }

    #[test]
    fn test_empty_yaml_document_is_null() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.yaml", "");
        let doc = load_document(&path).unwrap();
        assert_eq!(doc, Value::Null);
    }

    #[test]
    fn test_yaml_numbers_convert() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.yaml", "int: 42\nfloat: 3.5\nneg: -7\n");
        let doc = load_document(&path).unwrap();
        assert_eq!(doc, json!({ "int": 42, "float": 3.5, "neg": -7 }));
    }
}
