//! Snapshot persistence (I/O)
//!
//! A snapshot file is the JSON form of [`PageBundleSizes`]:
//! `[{"page": "/", "size": 1234}, ...]`.

use super::PageBundleSizes;
use crate::error::BundleSizeError;
use crate::infra::FileSystem;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a snapshot written by [`save_snapshot`]
pub fn load_snapshot<FS: FileSystem>(
    path: &Path,
    fs: &FS,
) -> Result<PageBundleSizes, BundleSizeError> {
    let contents = fs
        .read_to_string(path)
        .map_err(|source| BundleSizeError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&contents).map_err(|source| BundleSizeError::InvalidSnapshot {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a snapshot as pretty-printed JSON
pub fn save_snapshot<FS: FileSystem>(path: &Path, sizes: &PageBundleSizes, fs: &FS) -> Result<()> {
    let contents = serde_json::to_string_pretty(sizes).context("Failed to serialize snapshot")?;
    fs.write(path, contents)
        .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
    log::debug!("Saved {} page sizes to {}", sizes.len(), path.display());
    Ok(())
}
