//! Configuration file loading

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::BundleSizeError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::Result;
use std::path::Path;

/// Handles loading configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .bundle-size.toml in the given working directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bundle_size::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Measuring assets under {}", config.build_dir);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(working_dir: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(working_dir, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(working_dir: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = working_dir.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No {} found, using defaults", config_path.display());
                return Ok(ConfigFile::default());
            }
            Err(source) => {
                return Err(BundleSizeError::FileAccess {
                    path: config_path,
                    source,
                }
                .into());
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).map_err(|e| BundleSizeError::InvalidConfig {
                path: config_path.clone(),
                reason: e.to_string(),
            })?;

        config
            .validate()
            .map_err(|e| BundleSizeError::InvalidConfig {
                path: config_path.clone(),
                reason: e.to_string(),
            })?;

        log::debug!("Loaded {}: {:?}", config_path.display(), config);
        Ok(config)
    }
}
