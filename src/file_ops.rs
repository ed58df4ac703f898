//! Reading and writing message files
//!
//! Messages are UTF-8 text. Writes replace the target atomically so a
//! failed write never leaves a half-written message behind.

use crate::error::{CipherError, ErrorCategory, ErrorKind, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Read the whole of `path` as a UTF-8 message.
pub fn read_message(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
    String::from_utf8(bytes).map_err(|e| {
        CipherError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::InvalidEncoding,
            format!("{} is not valid UTF-8", path.display()),
            e,
        )
    })
}

/// Replace the contents of `path` with `contents`.
///
/// The message is written to a tempfile next to the target, flushed,
/// fsynced and renamed over the target.
pub fn write_message(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        let category = if e.kind() == io::ErrorKind::NotFound {
            ErrorCategory::User
        } else {
            ErrorCategory::Internal
        };
        CipherError::with_kind_and_source(
            category,
            ErrorKind::ResourceUnavailable,
            format!("failed to create tempfile in {}", dir.display()),
            e,
        )
    })?;

    temp_file
        .write_all(contents.as_bytes())
        .map_err(|e| write_error("failed to write to tempfile", e))?;
    // Flush and fsync() such that the rename, if it succeeds, always
    // points to a complete file.
    temp_file
        .flush()
        .map_err(|e| write_error("failed to flush tempfile", e))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| write_error("failed to sync file prior to rename", e))?;

    temp_file.persist(path).map_err(|e| {
        CipherError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::ResourceUnavailable,
            format!("failed to rename to target file {}", path.display()),
            e,
        )
    })?;
    Ok(())
}

fn write_error(msg: &str, err: io::Error) -> CipherError {
    CipherError::with_kind_and_source(
        ErrorCategory::Internal,
        ErrorKind::ResourceUnavailable,
        msg,
        err,
    )
}

fn read_error(path: &Path, err: io::Error) -> CipherError {
    let (category, kind) = if err.kind() == io::ErrorKind::NotFound {
        (ErrorCategory::User, ErrorKind::NotFound)
    } else {
        (ErrorCategory::Internal, ErrorKind::ResourceUnavailable)
    };
    CipherError::with_kind_and_source(
        category,
        kind,
        format!("failed to read from {}", path.display()),
        err,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_read_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("message.txt");

        write_message(&path, "khoor zruog\n").unwrap();
        assert_eq!(read_message(&path).unwrap(), "khoor zruog\n");
    }

    #[test]
    fn test_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("message.txt");
        fs::write(&path, "a much longer original message").unwrap();

        write_message(&path, "short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_leaves_no_tempfiles() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("message.txt");
        write_message(&path, "hello").unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_message(&temp_dir.path().join("nope.txt"))
            .expect_err("expected not found error");
        assert_eq!(err.kind, Some(ErrorKind::NotFound));
        assert_eq!(err.category, ErrorCategory::User);
    }

    #[test]
    fn test_read_non_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.bin");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = read_message(&path).expect_err("expected encoding error");
        assert_eq!(err.kind, Some(ErrorKind::InvalidEncoding));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("message.txt");

        let err = write_message(&path, "hello").expect_err("expected write error");
        assert_eq!(err.kind, Some(ErrorKind::ResourceUnavailable));
        assert_eq!(err.category, ErrorCategory::User);
    }

    #[test]
    fn test_empty_message() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.txt");
        write_message(&path, "").unwrap();
        assert_eq!(read_message(&path).unwrap(), "");
    }
}
