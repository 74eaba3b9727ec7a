//! Show command implementation
//!
//! Handles the `bundle-size show` command which renders one snapshot as a
//! two-column markdown table, without any comparison.

use anyhow::{Context, Result};
use std::path::Path;

use crate::infra::{FileSystem, RealFileSystem};
use crate::measure::load_snapshot;
use crate::report::SizeReporter;

/// Print a snapshot as a markdown table
///
/// # Errors
///
/// Returns an error if the snapshot file is missing or malformed.
pub fn cmd_show(name: &str, snapshot: &Path) -> Result<()> {
    println!("{}", show_output(name, snapshot, &RealFileSystem)?);
    Ok(())
}

/// Build the table text without printing it
pub fn show_output<FS: FileSystem>(name: &str, snapshot: &Path, fs: &FS) -> Result<String> {
    let sizes = load_snapshot(snapshot, fs)
        .with_context(|| format!("Failed to load snapshot {}", snapshot.display()))?;
    Ok(SizeReporter::default().render_single(name, &sizes))
}
