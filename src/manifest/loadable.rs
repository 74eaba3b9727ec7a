//! Lazily-loaded chunk manifest (`react-loadable-manifest.json`)
//!
//! Two schema generations exist in the wild. Older builds list one
//! `{id, file}` record per chunk; newer builds emit a single `{id, files}`
//! record per module. Both are normalized into a plain file list before any
//! filtering happens.

use super::{BuildManifest, OrderedMap};
use serde::Deserialize;
use std::collections::HashSet;

/// One chunk record of the list-of-records schema
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoadableChunk {
    /// Asset path relative to the build directory
    pub file: String,
}

/// Files a loadable module depends on, in either schema
///
/// An entry exposing a `files` attribute is the record-with-list schema;
/// anything else must be a list of [`LoadableChunk`] records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LoadableEntry {
    /// `{ "id": ..., "files": ["static/chunks/a.js", ...] }`
    Bundled {
        /// Asset paths
        files: Vec<String>,
    },
    /// `[{ "id": ..., "file": "static/chunks/a.js" }, ...]`
    Chunks(Vec<LoadableChunk>),
}

impl LoadableEntry {
    /// Normalize into the list of asset paths, in manifest order
    pub fn files(&self) -> Vec<&str> {
        match self {
            Self::Bundled { files } => files.iter().map(String::as_str).collect(),
            Self::Chunks(chunks) => chunks.iter().map(|c| c.file.as_str()).collect(),
        }
    }
}

/// Module identifier to entry, in manifest order
pub type LoadableManifest = OrderedMap<LoadableEntry>;

/// Reduce a loadable manifest to the assets each first-party module adds on
/// top of the shell page.
///
/// Modules whose identifier contains `vendor_marker` are dropped. Each
/// remaining module keeps its raw identifier as the page key, in manifest
/// order; its files are
/// de-duplicated (first occurrence wins) and stripped of anything listed in
/// `shell_files`.
pub fn page_specific_chunks(
    manifest: &LoadableManifest,
    shell_files: &[String],
    vendor_marker: &str,
) -> BuildManifest {
    let shared: HashSet<&str> = shell_files.iter().map(String::as_str).collect();
    let mut pages = OrderedMap::new();

    for (module_id, entry) in manifest {
        if module_id.contains(vendor_marker) {
            log::debug!("Skipping third-party module {}", module_id);
            continue;
        }

        let mut seen = HashSet::new();
        let files: Vec<String> = entry
            .files()
            .into_iter()
            .filter(|file| seen.insert(*file))
            .filter(|file| !shared.contains(file))
            .map(str::to_string)
            .collect();

        pages.insert(module_id.clone(), files);
    }

    BuildManifest { pages }
}
