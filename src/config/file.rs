//! Configuration file data structures

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".bundle-size.toml";

/// Build output directory the bundler writes manifests and assets to
pub const DEFAULT_BUILD_DIR: &str = ".next";

/// Page whose assets are shared by every lazily-loaded chunk
pub const DEFAULT_APP_SHELL_PAGE: &str = "/_app";

/// Module ids containing this segment come from third-party packages
pub const DEFAULT_VENDOR_MARKER: &str = "/node_modules/";

/// Minimum absolute size delta (bytes) for a changed page to be reported
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: u64 = 1000;

/// bundle-size configuration file structure
///
/// Every key is optional; missing keys take the defaults above.
///
/// ```toml
/// build-dir = ".next"
/// app-shell-page = "/_app"
/// vendor-marker = "/node_modules/"
/// significance-threshold = 1000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Build output directory, relative to the working directory
    pub build_dir: String,

    /// Shell page key in `build-manifest.json`
    pub app_shell_page: String,

    /// Third-party module marker in `react-loadable-manifest.json`
    pub vendor_marker: String,

    /// Significance threshold in bytes
    pub significance_threshold: u64,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            build_dir: DEFAULT_BUILD_DIR.to_string(),
            app_shell_page: DEFAULT_APP_SHELL_PAGE.to_string(),
            vendor_marker: DEFAULT_VENDOR_MARKER.to_string(),
            significance_threshold: DEFAULT_SIGNIFICANCE_THRESHOLD,
        }
    }
}

impl ConfigFile {
    /// Validate that the configured values can be used
    pub fn validate(&self) -> Result<()> {
        if self.build_dir.trim().is_empty() {
            anyhow::bail!("build-dir cannot be empty");
        }

        if Path::new(&self.build_dir).is_absolute() {
            anyhow::bail!(
                "build-dir must be relative to the working directory, got '{}'",
                self.build_dir
            );
        }

        // An empty marker would match every module id
        if self.vendor_marker.is_empty() {
            anyhow::bail!("vendor-marker cannot be empty");
        }

        Ok(())
    }
}
