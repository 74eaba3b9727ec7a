//! Error types with contextual suggestions
//!
//! Every failure in bundle-size is all-or-nothing: a missing manifest, an
//! unreadable asset or a malformed JSON file aborts the invocation. The
//! variants below carry enough context for the CLI to print an actionable
//! message and a sysexits-style exit code.
//!
//! # Examples
//!
//! ```
//! use bundle_size::error::BundleSizeError;
//! use std::path::PathBuf;
//!
//! let err = BundleSizeError::FileAccess {
//!     path: PathBuf::from(".next/build-manifest.json"),
//!     source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
//! };
//!
//! assert_eq!(err.exit_code(), 66);
//! assert!(err.suggestion().unwrap().contains("build"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving manifests, measuring assets or loading snapshots
#[derive(Error, Debug)]
pub enum BundleSizeError {
    /// A manifest, asset or snapshot file does not exist or cannot be read
    #[error("Cannot read {path}")]
    FileAccess {
        /// Path that could not be read
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// A manifest is not valid JSON or lacks the expected shape
    #[error("Failed to parse manifest {path}")]
    Parse {
        /// Path to the malformed manifest
        path: PathBuf,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },

    /// The pages manifest has no entry for the shell page, so shared assets
    /// cannot be told apart from chunk-specific ones
    #[error("{path} has no '{page}' entry")]
    MissingShellPage {
        /// Path to the pages manifest
        path: PathBuf,
        /// Configured shell page
        page: String,
    },

    /// A size snapshot file is not a list of `{page, size}` records
    #[error("Invalid size snapshot {path}")]
    InvalidSnapshot {
        /// Path to the snapshot file
        path: PathBuf,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },

    /// `.bundle-size.toml` is malformed or holds invalid values
    #[error("Invalid configuration in {path}: {reason}")]
    InvalidConfig {
        /// Path to the configuration file
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },

    /// Unknown manifest kind requested on the command line
    #[error("Unknown manifest kind: '{kind}'")]
    UnknownManifestKind {
        /// Requested kind
        kind: String,
        /// Accepted kinds
        valid_kinds: Vec<String>,
    },
}

impl BundleSizeError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_size::error::BundleSizeError;
    ///
    /// let err = BundleSizeError::UnknownManifestKind {
    ///     kind: "lazy".to_string(),
    ///     valid_kinds: vec!["static".to_string(), "dynamic".to_string()],
    /// };
    /// assert!(err.suggestion().unwrap().contains("static, dynamic"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::FileAccess { path, .. } => Some(format!(
                "Run the production build before measuring and check that {} exists",
                path.display()
            )),
            Self::Parse { .. } => Some(
                "The build output looks corrupted or was produced by an unsupported build tool version; rebuild and retry"
                    .to_string(),
            ),
            Self::MissingShellPage { page, .. } => Some(format!(
                "Set app-shell-page in .bundle-size.toml to the page every chunk shares, or rebuild so '{}' is emitted",
                page
            )),
            Self::InvalidSnapshot { .. } => Some(
                "Snapshot files must be JSON arrays of {\"page\": ..., \"size\": ...} records as written by 'bundle-size measure'"
                    .to_string(),
            ),
            Self::InvalidConfig { path, .. } => {
                Some(format!("Fix or remove {} to use the defaults", path.display()))
            }
            Self::UnknownManifestKind { valid_kinds, .. } => {
                Some(format!("Valid kinds: {}", valid_kinds.join(", ")))
            }
        }
    }

    /// Get appropriate exit code for this error, following sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileAccess { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => 66, // EX_NOINPUT
                _ => 74,                            // EX_IOERR
            },
            Self::Parse { .. } => 65,               // EX_DATAERR
            Self::MissingShellPage { .. } => 65,    // EX_DATAERR
            Self::InvalidSnapshot { .. } => 65,     // EX_DATAERR
            Self::InvalidConfig { .. } => 78,       // EX_CONFIG
            Self::UnknownManifestKind { .. } => 64, // EX_USAGE
        }
    }

    /// True for errors caused by a missing or unreadable file
    pub fn is_file_access(&self) -> bool {
        matches!(self, Self::FileAccess { .. })
    }

    /// True for errors caused by malformed JSON
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::InvalidSnapshot { .. })
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(suggestion) = error
            .downcast_ref::<BundleSizeError>()
            .and_then(BundleSizeError::suggestion)
        {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(err) = error.downcast_ref::<BundleSizeError>() {
            err.exit_code()
        } else {
            1
        }
    }
}
