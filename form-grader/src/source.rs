//! Loading the graded document from disk.

use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::DocumentError;

/// Read a document using a bounded streaming read, enforcing `max_file_size`.
///
/// At most `max_file_size + 1` bytes are read so an oversized file is detected
/// without loading it entirely.
///
/// # Errors
///
/// Returns a [`DocumentError`] if the file is missing, unreadable, larger than
/// `max_file_size`, or not valid UTF-8.
pub fn read_document(path: &Path, max_file_size: u64) -> Result<String, DocumentError> {
    let file = std::fs::File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            DocumentError::NotFound {
                path: path.to_owned(),
            }
        } else {
            DocumentError::Io {
                path: path.to_owned(),
                source: e,
            }
        }
    })?;

    let mut buffer = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| DocumentError::Io {
            path: path.to_owned(),
            source: e,
        })?;

    if buffer.len() as u64 > max_file_size {
        return Err(DocumentError::TooLarge {
            path: path.to_owned(),
            limit: max_file_size,
        });
    }

    String::from_utf8(buffer).map_err(|_| DocumentError::InvalidEncoding {
        path: path.to_owned(),
    })
}

/// Name shown for the document in check names: the file name, or the whole
/// path when it has none.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_read_document_ok() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("index.html");
        fs::write(&file, "<!DOCTYPE html><form></form>").unwrap();

        let content = read_document(&file, 1024).unwrap();
        assert_eq!(content, "<!DOCTYPE html><form></form>");
    }

    #[test]
    fn test_read_document_missing() {
        let tmp = TempDir::new().unwrap();
        let err = read_document(&tmp.path().join("index.html"), 1024).unwrap_err();
        assert!(matches!(err, DocumentError::NotFound { .. }), "got: {err}");
    }

    #[test]
    fn test_read_document_too_large() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("index.html");
        fs::write(&file, "x".repeat(32)).unwrap();

        let err = read_document(&file, 16).unwrap_err();
        assert!(matches!(err, DocumentError::TooLarge { limit: 16, .. }), "got: {err}");
    }

    #[test]
    fn test_read_document_exact_limit_is_allowed() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("index.html");
        fs::write(&file, "x".repeat(16)).unwrap();

        assert!(read_document(&file, 16).is_ok());
    }

    #[test]
    fn test_read_document_invalid_utf8() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("index.html");
        fs::write(&file, [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let err = read_document(&file, 1024).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidEncoding { .. }), "got: {err}");
    }

    #[test]
    fn test_display_name_uses_file_name() {
        assert_eq!(display_name(Path::new("site/pages/index.html")), "index.html");
        assert_eq!(display_name(&PathBuf::from("..")), "..");
    }
}
