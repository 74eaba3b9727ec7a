//! Compare command implementation
//!
//! Handles the `bundle-size compare` command which renders the difference
//! between a reference snapshot (usually the default branch) and the current
//! one as a markdown table. Nothing is printed when no change is significant,
//! so a CI step can post stdout as a comment only when it is non-empty.

use anyhow::{Context, Result};
use std::path::Path;

use crate::infra::{FileSystem, RealFileSystem};
use crate::measure::{load_snapshot, PageBundleSizes};
use crate::report::SizeReporter;

/// Options for [`cmd_compare`]
#[derive(Debug, Clone)]
pub struct CompareOptions<'a> {
    /// Table title, e.g. "Static pages"
    pub name: &'a str,
    /// Reference snapshot; `None` means there is no baseline yet
    pub reference: Option<&'a Path>,
    /// Current snapshot
    pub current: &'a Path,
    /// Print significant change rows as JSON instead of markdown
    pub json: bool,
}

/// Compare two snapshots and print the report
///
/// # Examples
///
/// ```no_run
/// use bundle_size::cmd::compare::{cmd_compare, CompareOptions};
/// use bundle_size::report::SizeReporter;
/// use std::path::Path;
///
/// let options = CompareOptions {
///     name: "Static pages",
///     reference: Some(Path::new("main/static.json")),
///     current: Path::new("static.json"),
///     json: false,
/// };
/// cmd_compare(&options, SizeReporter::with_default_threshold())?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if a given snapshot file is missing or malformed.
pub fn cmd_compare(options: &CompareOptions<'_>, reporter: SizeReporter) -> Result<()> {
    if let Some(output) = compare_output(options, reporter, &RealFileSystem)? {
        println!("{}", output);
    }
    Ok(())
}

/// Build the report text without printing it
pub fn compare_output<FS: FileSystem>(
    options: &CompareOptions<'_>,
    reporter: SizeReporter,
    fs: &FS,
) -> Result<Option<String>> {
    let reference: PageBundleSizes = match options.reference {
        Some(path) => load_snapshot(path, fs).context("Failed to load reference snapshot")?,
        None => {
            log::info!("No reference snapshot given, reporting every page");
            Vec::new()
        }
    };
    let current =
        load_snapshot(options.current, fs).context("Failed to load current snapshot")?;

    if options.json {
        let rows = reporter.keep_significant(reporter.diff(&reference, &current));
        let json = serde_json::to_string_pretty(&rows).context("Failed to serialize changes")?;
        return Ok(Some(json));
    }

    Ok(reporter.render_comparison(options.name, &reference, &current))
}
