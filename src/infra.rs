//! Infrastructure traits for abstracting I/O operations.
//!
//! Manifests, compiled assets, configuration and snapshot files are all read
//! through [`FileSystem`], so resolver and measurement code can be exercised
//! against an in-memory tree in tests.

use std::io;
use std::path::Path;

/// Trait for abstracting filesystem operations.
pub trait FileSystem {
    /// Read the entire contents of a file as raw bytes.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a slice of bytes to a file.
    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()>;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

/// In-memory filesystem for unit tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryFileSystem {
    files: std::cell::RefCell<std::collections::HashMap<std::path::PathBuf, Vec<u8>>>,
}

#[cfg(test)]
impl MemoryFileSystem {
    /// Create an empty filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_file(self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Self {
        self.files
            .borrow_mut()
            .insert(path.as_ref().to_path_buf(), contents.as_ref().to_vec());
        self
    }
}

#[cfg(test)]
impl FileSystem for MemoryFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{}", path.display()))
        })
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.as_ref().to_vec());
        Ok(())
    }
}
