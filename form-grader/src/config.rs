//! Configuration types for grading.
//!
//! Only the document source is configurable. The checklist itself is fixed
//! and lives in [`crate::checklist`].

use std::path::PathBuf;

/// Default document graded when no path is given.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Default upper bound on the document size (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_485_760;

/// Where the graded document comes from.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct SourceConfig {
    /// Path of the HTML document, relative to the working directory unless absolute.
    pub path: PathBuf,
    /// Maximum document size in bytes (default: 10 MB).
    /// Larger documents fail the existence check instead of being parsed.
    pub max_file_size: u64,
}

impl SourceConfig {
    /// Source reading the given path with default limits.
    #[must_use]
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DOCUMENT),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}
