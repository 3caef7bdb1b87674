#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Graverobber - Directory Sweep Reporter
//!
//! Graverobber walks the directory tree it is invoked in, skips files that
//! carry no substance (binary assets, lockfiles, build artifacts,
//! version-control internals), and buries what remains in a single
//! `report.txt`: an indented tree of the surviving hierarchy followed by a
//! JSON capture of every file's whitespace-stripped content.
//!
//! The stripped content is a compact fingerprint for bulk inspection and
//! diffing, not a reconstructable copy of the sources.
//!
//! ## Architecture
//!
//! - [`policy`]: the compiled-in exclusion rules
//! - [`tree`]: the indented tree renderer
//! - [`collect`]: the nested content collector
//! - [`report`]: the report file writer
//! - [`output`]: console messaging with verbosity control
//!
//! The scan is single-threaded and all-or-nothing: any filesystem or
//! decode error aborts the run without a report.

/// Content collection into nested, whitespace-normalized records.
pub mod collect;

/// Console messaging and verbosity control.
pub mod output;

/// The exclusion policy deciding which paths are skipped.
pub mod policy;

/// Report serialization and writing.
pub mod report;

/// Indented textual tree rendering.
pub mod tree;

use anyhow::{Context, Result};
use policy::ExclusionPolicy;
use std::path::PathBuf;

/// Current version of the graverobber binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the report file written into the scan root.
pub const REPORT_FILE_NAME: &str = "report.txt";

/// Fixed message announcing the start of the sweep.
const SCAN_START_MESSAGE: &str = "🪦 graverobber: the sweep begins, nothing stays buried";

/// Fixed message announcing that both walks finished.
const SCAN_DONE_MESSAGE: &str = "🔍 graverobber: the sweep is done, binding the report";

/// Fixed message announcing the sealed report.
const REPORT_DONE_MESSAGE: &str = "📜 graverobber: the report is sealed in report.txt";

/// Everything a scan needs: the root directory and the exclusion policy.
///
/// The policy is built once here and passed by reference into both
/// traversals, so tests can substitute their own instance.
#[derive(Debug, Clone)]
pub struct ScanContext {
    /// Root directory of the scan.
    pub root: PathBuf,

    /// Immutable exclusion rules for this run.
    pub policy: ExclusionPolicy,
}

impl ScanContext {
    /// Creates a context rooted at the current working directory.
    ///
    /// The policy excludes the running executable and the report file, so
    /// the tool never sweeps its own artifacts and repeat runs produce
    /// identical trees.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self> {
        let root = std::env::current_dir().context("Could not determine current directory")?;
        Ok(Self::with_root(root))
    }

    /// Creates a context rooted at an explicit directory (for tests).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        let mut self_paths = vec![root.join(REPORT_FILE_NAME)];
        if let Ok(exe) = std::env::current_exe() {
            self_paths.push(exe);
        }
        Self {
            policy: ExclusionPolicy::new(self_paths),
            root,
        }
    }

    /// Path of the report file for this scan.
    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        self.root.join(REPORT_FILE_NAME)
    }
}

/// Runs one full scan: renders the tree, collects the details, writes the
/// report, and narrates progress on the console.
///
/// The two traversals run sequentially and independently; each walks the
/// whole tree from the root with the same policy and listing order.
///
/// # Errors
///
/// Returns an error on any listing, stat, read, decode, or write failure.
/// The run is all-or-nothing; no partial report is produced.
pub fn run(ctx: &ScanContext) -> Result<()> {
    output::info(SCAN_START_MESSAGE);
    output::verbose(&format!("sweeping {}", ctx.root.display()));

    let tree = tree::render(&ctx.root, &ctx.policy)?;
    let details = collect::collect(&ctx.root, &ctx.policy)?;
    output::info(SCAN_DONE_MESSAGE);

    report::write_report(&ctx.report_path(), &tree, &details)?;
    output::success(REPORT_DONE_MESSAGE);

    Ok(())
}
