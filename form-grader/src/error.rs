//! Error types for loading the graded document.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// A failure that prevents the document from being graded at all.
///
/// These never escape a grading run: they are recorded as the failed,
/// fatal `File Existence` check.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// Nothing exists at the configured path.
    #[error("{} file not found", .path.display())]
    NotFound { path: PathBuf },
    /// The file exists but could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file exceeded the configured maximum size.
    #[error("{} exceeds maximum size of {limit} bytes", .path.display())]
    TooLarge { path: PathBuf, limit: u64 },
    /// The file content is not valid UTF-8.
    #[error("{} is not valid UTF-8", .path.display())]
    InvalidEncoding { path: PathBuf },
}

impl DocumentError {
    /// The path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::TooLarge { path, .. }
            | Self::InvalidEncoding { path } => path,
        }
    }
}
