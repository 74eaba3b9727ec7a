//! Measure command implementation
//!
//! Handles the `bundle-size measure` command which resolves the build
//! manifests, gzips every referenced asset and writes the per-page sizes as a
//! JSON snapshot.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::ConfigLoader;
use crate::fmt::{symbol, CHECKMARK};
use crate::infra::RealFileSystem;
use crate::manifest::ManifestKind;
use crate::measure::{self, PageBundleSizes};

/// Measure a build and write its snapshot to `out`, or stdout when `None`
///
/// # Examples
///
/// ```no_run
/// use bundle_size::cmd::measure::cmd_measure;
/// use std::path::Path;
///
/// // Static pages of the app in the current directory, printed as JSON
/// cmd_measure(Path::new("."), "static", None)?;
///
/// // Lazy chunks of a monorepo app, saved for a later comparison
/// cmd_measure(Path::new("apps/web"), "dynamic", Some(Path::new("dynamic.json")))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `kind` is neither `static` nor `dynamic`
/// - a manifest or asset file is missing or unreadable
/// - a manifest is not valid JSON
pub fn cmd_measure(working_dir: &Path, kind: &str, out: Option<&Path>) -> Result<()> {
    let sizes = measure_snapshot(working_dir, kind)?;

    match out {
        Some(path) => {
            measure::save_snapshot(path, &sizes, &RealFileSystem)?;
            println!(
                "{}Wrote {} page sizes to {}",
                symbol(CHECKMARK),
                sizes.len(),
                path.display()
            );
        }
        None => {
            let json =
                serde_json::to_string_pretty(&sizes).context("Failed to serialize snapshot")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Resolve and measure one class of pages under `working_dir`
pub fn measure_snapshot(working_dir: &Path, kind: &str) -> Result<PageBundleSizes> {
    let kind: ManifestKind = kind.parse()?;
    let config = ConfigLoader::load(working_dir)?;
    measure::bundle_sizes_with_fs(working_dir, &config, kind, RealFileSystem)
        .with_context(|| format!("Failed to measure {} pages in {}", kind, working_dir.display()))
}
