//! Build manifest resolution
//!
//! Reduces the bundler's JSON manifests to a single shape: logical page (or
//! lazily-loaded module) to the compiled asset files it depends on.
//!
//! Inputs, all under the build directory:
//! - `build-manifest.json`: `{ "pages": { "/route": ["static/...js"] } }`
//! - `app-build-manifest.json`: same shape, for app-router pages
//! - `react-loadable-manifest.json`: module id to chunk files, see [`loadable`]

pub mod loadable;
mod ordered;

pub use loadable::{page_specific_chunks, LoadableChunk, LoadableEntry, LoadableManifest};
pub use ordered::OrderedMap;

use crate::config::ConfigFile;
use crate::error::BundleSizeError;
use crate::infra::{FileSystem, RealFileSystem};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Pages-router manifest file name
pub const BUILD_MANIFEST: &str = "build-manifest.json";

/// App-router manifest file name
pub const APP_BUILD_MANIFEST: &str = "app-build-manifest.json";

/// Lazily-loaded module manifest file name
pub const LOADABLE_MANIFEST: &str = "react-loadable-manifest.json";

/// Page path to the asset files that page depends on, in manifest order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BuildManifest {
    /// Asset paths per page, relative to the build directory
    pub pages: OrderedMap<Vec<String>>,
}

impl BuildManifest {
    /// Merge `other` over `self`
    ///
    /// Pages of `self` keep their position; on key collision the files of
    /// `other` win. Pages only in `other` are appended in `other`'s order.
    pub fn merge(mut self, other: BuildManifest) -> Self {
        self.pages.extend(other.pages);
        self
    }

    /// Asset files of one page, if present
    pub fn files(&self, page: &str) -> Option<&[String]> {
        self.pages.get(page).map(Vec::as_slice)
    }
}

/// Which class of pages to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// Statically bundled entry pages (pages and app router)
    Static,
    /// Lazily-loaded chunks, minus the shell page's shared assets
    Dynamic,
}

impl ManifestKind {
    /// Accepted names, in CLI order
    pub const NAMES: [&'static str; 2] = ["static", "dynamic"];
}

impl FromStr for ManifestKind {
    type Err = BundleSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(Self::Static),
            "dynamic" => Ok(Self::Dynamic),
            other => Err(BundleSizeError::UnknownManifestKind {
                kind: other.to_string(),
                valid_kinds: Self::NAMES.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// Loads manifests from a build directory
pub struct ManifestResolver<FS: FileSystem = RealFileSystem> {
    build_dir: PathBuf,
    app_shell_page: String,
    vendor_marker: String,
    fs: FS,
}

impl ManifestResolver<RealFileSystem> {
    /// Create a resolver for `<working_dir>/<config.build_dir>` on the real filesystem
    pub fn new(working_dir: &Path, config: &ConfigFile) -> Self {
        Self::with_fs(working_dir, config, RealFileSystem)
    }
}

impl<FS: FileSystem> ManifestResolver<FS> {
    /// Create a resolver with a custom filesystem implementation
    pub fn with_fs(working_dir: &Path, config: &ConfigFile, fs: FS) -> Self {
        Self {
            build_dir: working_dir.join(&config.build_dir),
            app_shell_page: config.app_shell_page.clone(),
            vendor_marker: config.vendor_marker.clone(),
            fs,
        }
    }

    /// Directory manifests and assets are read from
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Filesystem used for all reads
    pub fn fs(&self) -> &FS {
        &self.fs
    }

    /// Resolve the requested class of pages
    pub fn resolve(&self, kind: ManifestKind) -> Result<BuildManifest, BundleSizeError> {
        match kind {
            ManifestKind::Static => self.resolve_static_pages(),
            ManifestKind::Dynamic => self.resolve_dynamic_chunks(),
        }
    }

    /// Statically bundled pages: the pages manifest merged with the
    /// app-router manifest, app-router entries taking precedence.
    ///
    /// # Errors
    ///
    /// [`BundleSizeError::FileAccess`] if either manifest cannot be read,
    /// [`BundleSizeError::Parse`] if either is malformed.
    pub fn resolve_static_pages(&self) -> Result<BuildManifest, BundleSizeError> {
        let pages: BuildManifest = self.load_json(BUILD_MANIFEST)?;
        let app: BuildManifest = self.load_json(APP_BUILD_MANIFEST)?;

        let merged = pages.merge(app);
        log::debug!("Resolved {} static pages", merged.pages.len());
        Ok(merged)
    }

    /// Lazily-loaded first-party modules and the assets each one adds on top
    /// of the shell page.
    ///
    /// # Errors
    ///
    /// [`BundleSizeError::FileAccess`] if the pages or loadable manifest
    /// cannot be read, [`BundleSizeError::Parse`] if either is malformed,
    /// [`BundleSizeError::MissingShellPage`] if the pages manifest has no
    /// shell page entry.
    pub fn resolve_dynamic_chunks(&self) -> Result<BuildManifest, BundleSizeError> {
        let pages: BuildManifest = self.load_json(BUILD_MANIFEST)?;
        let shell_files = pages.files(&self.app_shell_page).ok_or_else(|| {
            BundleSizeError::MissingShellPage {
                path: self.build_dir.join(BUILD_MANIFEST),
                page: self.app_shell_page.clone(),
            }
        })?;

        let loadable: LoadableManifest = self.load_json(LOADABLE_MANIFEST)?;
        let chunks = page_specific_chunks(&loadable, shell_files, &self.vendor_marker);

        log::debug!(
            "Resolved {} dynamic chunks from {} loadable modules",
            chunks.pages.len(),
            loadable.len()
        );
        Ok(chunks)
    }

    fn load_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, BundleSizeError> {
        let path = self.build_dir.join(file_name);
        log::debug!("Reading {}", path.display());

        let contents = self
            .fs
            .read_to_string(&path)
            .map_err(|source| BundleSizeError::FileAccess {
                path: path.clone(),
                source,
            })?;

        serde_json::from_str(&contents).map_err(|source| BundleSizeError::Parse { path, source })
    }
}
