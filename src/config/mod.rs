//! Configuration for bundle-size
//!
//! Settings live in an optional `.bundle-size.toml` next to the build output.
//! Without it, the defaults describe a stock Next.js build.

pub mod file;
pub mod loader;

pub use file::{
    ConfigFile, CONFIG_FILE_NAME, DEFAULT_APP_SHELL_PAGE, DEFAULT_BUILD_DIR,
    DEFAULT_SIGNIFICANCE_THRESHOLD, DEFAULT_VENDOR_MARKER,
};
pub use loader::ConfigLoader;
