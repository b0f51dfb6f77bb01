//! Output planning.
//!
//! Decides which Markdown files a conversion produces. Planning is pure;
//! the conversion command does the actual writing.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::markdown::leaf_text;

/// A single Markdown file to produce.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputJob {
    /// Where the rendered Markdown goes.
    pub path: PathBuf,
    /// The subtree to render into it.
    pub document: Value,
}

/// Plans the output files for a normalized document.
///
/// With `split_key` set and a sequence at the document root, every element
/// that is a mapping containing the key becomes its own file named after the
/// key's value, under a directory named after the input file minus its
/// extension. Elements without the key are skipped without comment, matching
/// the tool's historical behavior. In every other case the whole document
/// becomes a single file next to the input, extension replaced by `.md`.
#[must_use]
pub fn plan_jobs(input: &Path, document: Value, split_key: Option<&str>) -> Vec<OutputJob> {
    match (split_key, document) {
        (Some(key), Value::Array(items)) => {
            let dir = input.with_extension("");
            items
                .into_iter()
                .filter_map(|item| {
                    let Some(stem) = split_stem(&item, key) else {
                        tracing::debug!(%key, "skipping element without split key");
                        return None;
                    };
                    Some(OutputJob {
                        path: dir.join(format!("{stem}.md")),
                        document: item,
                    })
                })
                .collect()
        }
        (_, document) => vec![OutputJob {
            path: input.with_extension("md"),
            document,
        }],
    }
}

/// File stem for a sequence element in split mode.
fn split_stem(item: &Value, key: &str) -> Option<String> {
    match item {
        Value::Object(entries) => entries.get(key).map(leaf_text),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
