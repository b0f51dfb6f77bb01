//! Markdown rendering of structured value trees.
//!
//! Mapping keys and sequence positions become heading lines whose level
//! equals nesting depth; leaves render as plain text. One mapping key is
//! reserved: a value sitting under [`MERMAID_KEY`] is emitted as a fenced
//! diagram block instead of a heading section.

use serde_json::Value;

/// Mapping key whose value renders as a fenced `mermaid` block.
pub const MERMAID_KEY: &str = "mermaid";

/// Renders a document tree as Markdown, starting at heading level 1.
#[must_use]
pub fn render(value: &Value) -> String {
    render_at(value, 0, None)
}

/// Renders a subtree at the given heading depth.
///
/// `parent_key` is the mapping key under which `value` sits; passing
/// [`MERMAID_KEY`] switches to the fenced diagram form. Heading level is
/// `depth + 1` and is not capped: sections nested past level 6 simply get
/// longer `#` runs.
///
/// Sequence elements are numbered from 1 in iteration order. The result
/// never starts or ends with a blank line, and sibling sections are
/// separated by exactly one; each recursive join trims its section bodies
/// to keep that invariant.
#[must_use]
pub fn render_at(value: &Value, depth: usize, parent_key: Option<&str>) -> String {
    if parent_key == Some(MERMAID_KEY) {
        return format!("```mermaid\n{}\n```", leaf_text(value));
    }

    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| section(&(index + 1).to_string(), item, depth, None))
            .collect::<Vec<_>>()
            .join("\n\n"),
        Value::Object(entries) => entries
            .iter()
            .map(|(key, item)| section(key, item, depth, Some(key.as_str())))
            .collect::<Vec<_>>()
            .join("\n\n"),
        leaf => leaf_text(leaf),
    }
}

/// One heading plus its rendered body.
fn section(title: &str, value: &Value, depth: usize, key: Option<&str>) -> String {
    let heading = format!("{} {title}", "#".repeat(depth + 1));
    let body = render_at(value, depth + 1, key);
    let body = body.trim_end();
    if body.is_empty() {
        heading
    } else {
        format!("{heading}\n\n{body}")
    }
}

/// Textual form of a value outside heading context.
///
/// Leaves use their plain representation; composite values (reachable only
/// through the reserved-key override and split-key file naming) fall back to
/// compact JSON.
pub(crate) fn leaf_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        composite => composite.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
