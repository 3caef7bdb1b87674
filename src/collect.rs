//! Collects included files into a nested record of normalized contents.
//!
//! The collector mirrors the tree renderer's filtering exactly (same
//! policy, same listing order) but builds a nested map instead of text.
//! File contents are stored with every whitespace character removed, a
//! deliberately lossy fingerprint meant for bulk inspection, not for
//! reconstructing the files.

use crate::policy::ExclusionPolicy;
use anyhow::{Context, Result};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{Level, debug, span};

/// A single collected file: its full path and its normalized content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Full filesystem path of the file.
    pub path: PathBuf,

    /// Raw text of the file with all whitespace characters removed.
    pub content: String,
}

/// One entry of a directory record: a file or a nested directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A collected file.
    File(FileRecord),

    /// A nested directory, possibly empty.
    Directory(DirectoryRecord),
}

impl Entry {
    /// Returns the nested directory record, if this entry is a directory.
    #[must_use]
    pub fn as_directory(&self) -> Option<&DirectoryRecord> {
        match self {
            Entry::Directory(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }

    /// Returns the file record, if this entry is a file.
    #[must_use]
    pub fn as_file(&self) -> Option<&FileRecord> {
        match self {
            Entry::File(record) => Some(record),
            Entry::Directory(_) => None,
        }
    }
}

/// Mapping from child name to entry, keyed as the names appear on disk.
///
/// Keys keep directory-listing order, so the record serializes in the
/// same order the tree renderer emits lines. An empty directory is an
/// empty record, not an omitted key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryRecord {
    /// Child entries in directory-listing order.
    entries: Vec<(String, Entry)>,
}

impl DirectoryRecord {
    /// Appends an entry, preserving insertion order.
    fn insert(&mut self, name: String, entry: Entry) {
        self.entries.push((name, entry));
    }

    /// Looks up a child entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, entry)| entry)
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the directory held no included entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for DirectoryRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Entry::File(record) => record.serialize(serializer),
            Entry::Directory(dir) => dir.serialize(serializer),
        }
    }
}

/// Removes every whitespace character from `raw`, internal runs included.
#[must_use]
pub fn normalize_content(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Recursively collects the non-excluded entries under `dir`.
///
/// Files are read as UTF-8 text and stored normalized; directories
/// recurse into nested records. Symlinks are followed via stat, matching
/// the tree renderer.
///
/// # Errors
///
/// Any listing, stat, read, or decode failure (a file that is not valid
/// UTF-8 text) aborts the whole traversal; there is no per-file
/// isolation and no partial record.
pub fn collect(dir: &Path, policy: &ExclusionPolicy) -> Result<DirectoryRecord> {
    let span = span!(Level::DEBUG, "collect", dir = %dir.display());
    let _guard = span.enter();

    let mut record = DirectoryRecord::default();
    let listing =
        fs::read_dir(dir).with_context(|| format!("Failed to list directory {}", dir.display()))?;

    for entry in listing {
        let entry = entry
            .with_context(|| format!("Failed to read a directory entry in {}", dir.display()))?;
        let path = entry.path();

        if policy.is_ignored(&path) {
            debug!(path = %path.display(), "excluded from collection");
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let metadata =
            fs::metadata(&path).with_context(|| format!("Failed to stat {}", path.display()))?;

        if metadata.is_dir() {
            record.insert(name, Entry::Directory(collect(&path, policy)?));
        } else {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {} as text", path.display()))?;
            record.insert(
                name,
                Entry::File(FileRecord {
                    path,
                    content: normalize_content(&raw),
                }),
            );
        }
    }

    Ok(record)
}
