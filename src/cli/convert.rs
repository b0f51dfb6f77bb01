//! The conversion command: load, normalize, plan, render, write.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::loader::load_document;
use crate::markdown;
use crate::normalize::normalize;
use crate::output::plan_jobs;

/// Converts `input` and writes the planned Markdown file(s).
///
/// Output directories are created as needed and existing files are
/// overwritten. Jobs run sequentially; a failure partway leaves the files
/// already written in place.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded or a file write fails.
pub fn run(input: &Path, split_key: Option<&str>) -> Result<()> {
    let document = load_document(input)?;
    tracing::debug!(input = %input.display(), "document loaded");

    let document = normalize(document);

    let jobs = plan_jobs(input, document, split_key);
    if jobs.is_empty() {
        tracing::warn!(
            key = split_key.unwrap_or_default(),
            "no sequence element carries the split key; nothing written"
        );
    }

    for job in &jobs {
        if let Some(dir) = job.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&job.path, markdown::render(&job.document))?;
        tracing::info!(path = %job.path.display(), "wrote output");
    }

    tracing::debug!(files = jobs.len(), "conversion finished");
    Ok(())
}
