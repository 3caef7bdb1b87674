//! Writes the tree text and the collected details into one report file.

use crate::collect::DirectoryRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Header line preceding the tree section.
const TREE_HEADER: &str = "FileTree:";

/// Header line preceding the serialized details section.
const DETAILS_HEADER: &str = "Details:";

/// Serializes `details` and writes the whole report to `path`, overwriting
/// any previous report. The buffer is assembled in memory and written in
/// one call, UTF-8 encoded, so non-ASCII names and the tree glyphs survive
/// intact.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written;
/// no partial report is left behind by this function itself.
pub fn write_report(path: &Path, tree: &str, details: &DirectoryRecord) -> Result<()> {
    let details_json =
        serde_json::to_string(details).context("Failed to serialize report details")?;
    let buffer = format!("{TREE_HEADER}\n{tree}\n\n{DETAILS_HEADER}\n{details_json}");

    fs::write(path, buffer)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    Ok(())
}
