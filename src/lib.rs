#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! bundle-size library
//!
//! Measures the gzipped size of a Next.js build's pages and lazily-loaded
//! chunks, and renders markdown reports comparing two builds. The CLI is a
//! thin wrapper around the functions exported here.
//!
//! # Basic Example
//!
//! Comparing two snapshots:
//!
//! ```
//! use bundle_size::measure::PageSize;
//! use bundle_size::report::render_comparison;
//!
//! let reference = vec![PageSize::new("/", 40_000), PageSize::new("/legacy", 9_000)];
//! let current = vec![PageSize::new("/", 43_072), PageSize::new("/blog", 12_000)];
//!
//! let table = render_comparison("Static pages", &reference, &current).unwrap();
//! assert!(table.contains("| `/` | 42.06 KB | +3 KB |"));
//! assert!(table.contains("| `/blog` | 11.72 KB | added |"));
//! assert!(table.contains("| `/legacy` | no change | removed |"));
//! ```
//!
//! # Advanced Example: Measuring a Build
//!
//! ```
//! use bundle_size::manifest::ManifestKind;
//! use bundle_size::measure::bundle_sizes;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let app = TempDir::new().unwrap();
//! let build = app.path().join(".next");
//! fs::create_dir_all(build.join("static")).unwrap();
//! fs::write(build.join("build-manifest.json"), r#"{"pages": {"/": ["static/index.js"]}}"#).unwrap();
//! fs::write(build.join("app-build-manifest.json"), r#"{"pages": {}}"#).unwrap();
//! fs::write(build.join("static/index.js"), "export default 1").unwrap();
//!
//! let sizes = bundle_sizes(app.path(), ManifestKind::Static).unwrap();
//! assert_eq!(sizes.len(), 1);
//! assert_eq!(sizes[0].page, "/");
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Build manifest resolution
pub mod manifest;
/// Gzipped size measurement and snapshots
pub mod measure;
/// Size change reports
pub mod report;
