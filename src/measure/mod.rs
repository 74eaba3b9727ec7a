//! Gzipped size measurement
//!
//! Every asset of a resolved manifest is read from the build directory,
//! gzip-compressed with default settings and the compressed lengths are
//! summed per page. Compression is redone on every run; manifests carry no
//! compressed sizes.

mod snapshot;

pub use snapshot::{load_snapshot, save_snapshot};

use crate::config::{ConfigFile, ConfigLoader};
use crate::error::BundleSizeError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::manifest::{BuildManifest, ManifestKind, ManifestResolver};
use anyhow::Result;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;

/// Gzipped size of one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSize {
    /// Page path or loadable module id
    pub page: String,
    /// Sum of the gzipped sizes of the page's assets, in bytes
    pub size: u64,
}

impl PageSize {
    /// Create a page size record
    pub fn new(page: impl Into<String>, size: u64) -> Self {
        Self {
            page: page.into(),
            size,
        }
    }
}

/// One snapshot of a build: page sizes in manifest order
pub type PageBundleSizes = Vec<PageSize>;

/// Length of `bytes` after gzip compression at the default level
///
/// # Examples
///
/// ```
/// use bundle_size::measure::gzip_size;
///
/// let size = gzip_size(&[b'a'; 10_000]).unwrap();
/// assert!(size > 0 && size < 100);
/// ```
pub fn gzip_size(bytes: &[u8]) -> io::Result<u64> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    let compressed = encoder.finish()?;
    Ok(compressed.len() as u64)
}

/// Sum the gzipped sizes of every page's assets
///
/// Fails on the first asset that cannot be read; no partial result is
/// returned.
pub fn measure_manifest<FS: FileSystem>(
    manifest: &BuildManifest,
    build_dir: &Path,
    fs: &FS,
) -> Result<PageBundleSizes, BundleSizeError> {
    let mut sizes = Vec::with_capacity(manifest.pages.len());

    for (page, files) in &manifest.pages {
        let mut total = 0u64;
        for file in files {
            let path = build_dir.join(file);
            let bytes = fs.read(&path).map_err(|source| BundleSizeError::FileAccess {
                path: path.clone(),
                source,
            })?;
            let compressed = gzip_size(&bytes)
                .map_err(|source| BundleSizeError::FileAccess { path, source })?;
            log::debug!("{} -> {} bytes gzipped", file, compressed);
            total += compressed;
        }
        sizes.push(PageSize::new(page.clone(), total));
    }

    Ok(sizes)
}

/// Measure one class of pages under `working_dir`, honoring `.bundle-size.toml`
///
/// # Examples
///
/// ```no_run
/// use bundle_size::manifest::ManifestKind;
/// use bundle_size::measure::bundle_sizes;
/// use std::path::Path;
///
/// let sizes = bundle_sizes(Path::new("apps/web"), ManifestKind::Static)?;
/// for entry in &sizes {
///     println!("{}: {} bytes", entry.page, entry.size);
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn bundle_sizes(working_dir: &Path, kind: ManifestKind) -> Result<PageBundleSizes> {
    let config = ConfigLoader::load(working_dir)?;
    bundle_sizes_with_fs(working_dir, &config, kind, RealFileSystem)
}

/// Statically bundled page sizes under `working_dir`
pub fn static_bundle_sizes(working_dir: &Path) -> Result<PageBundleSizes> {
    bundle_sizes(working_dir, ManifestKind::Static)
}

/// Lazily-loaded chunk sizes under `working_dir`
pub fn dynamic_bundle_sizes(working_dir: &Path) -> Result<PageBundleSizes> {
    bundle_sizes(working_dir, ManifestKind::Dynamic)
}

/// Measure with an explicit configuration and filesystem
pub fn bundle_sizes_with_fs<FS: FileSystem>(
    working_dir: &Path,
    config: &ConfigFile,
    kind: ManifestKind,
    fs: FS,
) -> Result<PageBundleSizes> {
    let resolver = ManifestResolver::with_fs(working_dir, config, fs);
    let manifest = resolver.resolve(kind)?;
    let sizes = measure_manifest(&manifest, resolver.build_dir(), resolver.fs())?;

    log::info!(
        "Measured {} {} pages ({} bytes gzipped in total)",
        sizes.len(),
        kind,
        sizes.iter().map(|s| s.size).sum::<u64>()
    );
    Ok(sizes)
}
