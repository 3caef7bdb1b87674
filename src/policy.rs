//! The exclusion policy deciding which paths are omitted from the scan.
//!
//! The rule set is compiled in and never mutated. The only runtime input is
//! the set of self paths (the running executable and the report file), so
//! the tool never sweeps its own artifacts.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// File name suffixes that are always excluded (binary and media assets,
/// lockfiles, SQLite databases, Markdown).
const IGNORED_EXTENSIONS: &[&str] = &[
    ".bin", ".svg", ".jpg", ".jpeg", ".png", ".gif", ".mp3", ".mp4", ".wav", ".ico", ".sqlite",
    ".lock", ".md",
];

/// Directory names that are excluded wherever they appear in the hierarchy,
/// together with everything beneath them.
const IGNORED_DIRS: &[&str] = &[".git", "public", "target", "assets", ".next", "node_modules"];

/// File names that are excluded by exact match.
const IGNORED_FILENAMES: &[&str] = &["yarn.lock"];

/// Pure predicate over path strings deciding what the scan skips.
///
/// Built once at startup and passed by reference into both traversals, so
/// tests can substitute their own instance.
#[derive(Debug, Clone, Default)]
pub struct ExclusionPolicy {
    /// Paths belonging to the tool itself, excluded by exact match.
    self_paths: Vec<PathBuf>,
}

impl ExclusionPolicy {
    /// Creates a policy that additionally excludes the given self paths.
    #[must_use]
    pub fn new(self_paths: Vec<PathBuf>) -> Self {
        Self { self_paths }
    }

    /// Returns true if `path` must be skipped entirely.
    ///
    /// Matching is string based, not component based: an ignored directory
    /// name matches as an interior segment (`/name/`) or as the suffix of
    /// the path, never as a bare substring. A file named `myassets.txt`
    /// therefore passes, while a directory literally named `assets` is
    /// pruned along with its whole subtree.
    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.self_paths.iter().any(|own| own == path) {
            return true;
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or(Cow::Borrowed(""));

        if IGNORED_EXTENSIONS
            .iter()
            .any(|ext| file_name.ends_with(ext))
        {
            return true;
        }

        let path_str = path.to_string_lossy();
        let sep = std::path::MAIN_SEPARATOR;
        for dir in IGNORED_DIRS {
            if path_str.contains(&format!("{sep}{dir}{sep}")) || path_str.ends_with(*dir) {
                return true;
            }
        }

        IGNORED_FILENAMES.iter().any(|name| file_name == *name)
    }
}
