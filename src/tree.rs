//! Renders the included hierarchy as an indented textual tree.

use crate::policy::ExclusionPolicy;
use anyhow::Result;
use std::path::Path;
use tracing::{Level, debug, span};
use walkdir::WalkDir;

/// Marker prefixed to directory lines.
pub const FOLDER_GLYPH: &str = "📂";

/// Marker prefixed to file lines.
pub const FILE_GLYPH: &str = "📄";

/// Indentation added per nesting level.
const INDENT: &str = "  ";

/// Renders the subtree under `root` as text, one line per included entry.
///
/// Entries appear in the platform's native listing order, depth first and
/// pre-order: a directory's line comes before the lines of its children,
/// indented two spaces per level below the root. Excluded entries emit
/// nothing and are never descended into. The root itself emits no line.
///
/// Symlinks are followed, so a broken link surfaces as a failed stat.
///
/// # Errors
///
/// Returns an error if any directory listing or stat fails; no partial
/// tree is produced.
pub fn render(root: &Path, policy: &ExclusionPolicy) -> Result<String> {
    let span = span!(Level::DEBUG, "tree_render", root = %root.display());
    let _guard = span.enter();

    let mut tree = String::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| {
            // The root itself is never tested, only its descendants.
            if entry.depth() == 0 {
                return true;
            }
            let keep = !policy.is_ignored(entry.path());
            if !keep {
                debug!(path = %entry.path().display(), "excluded from tree");
            }
            keep
        })
    {
        let entry = entry?;
        let glyph = if entry.file_type().is_dir() {
            FOLDER_GLYPH
        } else {
            FILE_GLYPH
        };
        let indent = INDENT.repeat(entry.depth() - 1);
        let name = entry.file_name().to_string_lossy();
        tree.push_str(&format!("{indent}{glyph}{name}\n"));
    }

    Ok(tree)
}
