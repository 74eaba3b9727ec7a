//! Test fixture helpers for creating build output directories
//!
//! Provides a small builder that lays out `.next/` the way a production
//! build does: the three manifests plus the compiled assets they reference.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// A temporary application directory with a `.next` build output
pub struct BuildFixture {
    pub dir: TempDir,
}

impl BuildFixture {
    /// Create an empty application directory
    pub fn new() -> anyhow::Result<Self> {
        let dir = TempDir::new()?;
        fs::create_dir_all(dir.path().join(".next"))?;
        Ok(Self { dir })
    }

    /// Application (working) directory
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Build output directory
    pub fn build_dir(&self) -> PathBuf {
        self.dir.path().join(".next")
    }

    /// Write a file relative to the build output directory
    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> anyhow::Result<PathBuf> {
        let path = self.build_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write a file relative to the application directory
    pub fn write_root(&self, relative: &str, contents: impl AsRef<[u8]>) -> anyhow::Result<PathBuf> {
        let path = self.root().join(relative);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write an asset whose content compresses poorly, `len` bytes long
    pub fn write_asset(&self, relative: &str, len: usize) -> anyhow::Result<PathBuf> {
        self.write(relative, pseudo_random_bytes(len, relative.len() as u64))
    }
}

/// A typical small app: two pages-router pages, one app-router page and one
/// lazily-loaded chart component alongside a third-party locale chunk.
pub fn create_sample_build() -> anyhow::Result<BuildFixture> {
    let fixture = BuildFixture::new()?;

    fixture.write(
        "build-manifest.json",
        r#"{
  "polyfillFiles": ["static/chunks/polyfills.js"],
  "devFiles": [],
  "pages": {
    "/": ["static/chunks/webpack.js", "static/chunks/main.js", "static/chunks/pages/index.js"],
    "/_app": ["static/chunks/webpack.js", "static/chunks/main.js", "static/chunks/pages/_app.js"],
    "/about": ["static/chunks/webpack.js", "static/chunks/main.js", "static/chunks/pages/about.js"]
  }
}"#,
    )?;
    fixture.write(
        "app-build-manifest.json",
        r#"{
  "pages": {
    "/dashboard/page": ["static/chunks/webpack.js", "static/chunks/app/dashboard/page.js"]
  }
}"#,
    )?;
    fixture.write(
        "react-loadable-manifest.json",
        r#"{
  "pages/index.tsx -> ../components/Chart": {
    "id": 4711,
    "files": ["static/chunks/main.js", "static/chunks/4711.js"]
  },
  "../node_modules/dayjs/index.js -> ./locale": {
    "id": 99,
    "files": ["static/chunks/99.js"]
  }
}"#,
    )?;

    for (asset, len) in [
        ("static/chunks/webpack.js", 2_000),
        ("static/chunks/main.js", 30_000),
        ("static/chunks/pages/index.js", 4_000),
        ("static/chunks/pages/_app.js", 1_000),
        ("static/chunks/pages/about.js", 500),
        ("static/chunks/app/dashboard/page.js", 8_000),
        ("static/chunks/4711.js", 6_000),
        ("static/chunks/99.js", 3_000),
    ] {
        fixture.write_asset(asset, len)?;
    }

    Ok(fixture)
}

/// Deterministic, poorly compressible bytes
pub fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as u8
        })
        .collect()
}

/// Write a snapshot JSON file from `(page, size)` pairs
pub fn write_snapshot(dir: &Path, name: &str, entries: &[(&str, u64)]) -> anyhow::Result<PathBuf> {
    let records: Vec<serde_json::Value> = entries
        .iter()
        .map(|(page, size)| serde_json::json!({ "page": page, "size": size }))
        .collect();
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(&records)?)?;
    Ok(path)
}
