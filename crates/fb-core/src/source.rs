//! Loading raw log lines from disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The log file does not exist.
    #[error("no such file: {}", path.display())]
    NotFound { path: PathBuf },

    /// The log file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads the whole file and splits it into lines.
///
/// An existing empty file yields no lines; a missing file is
/// [`SourceError::NotFound`].
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            SourceError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            SourceError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    tracing::debug!(path = %path.display(), lines = lines.len(), "loaded log file");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_all_lines() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("session.log");
        std::fs::write(
            &path,
            "14:02:03 ALICE99 Start\r\n14:02:05 CHARLIE End\n\nXXXX\n",
        )
        .unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(
            lines,
            ["14:02:03 ALICE99 Start", "14:02:05 CHARLIE End", "", "XXXX"]
        );
    }

    #[test]
    fn test_empty_file_is_not_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("empty.log");
        std::fs::write(&path, "").unwrap();

        assert!(read_lines(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing.log");

        let err = read_lines(&path).unwrap_err();
        assert!(matches!(&err, SourceError::NotFound { path: p } if *p == path));
        assert_eq!(err.to_string(), format!("no such file: {}", path.display()));
    }

    #[test]
    fn test_directory_is_read_error() {
        let temp = tempfile::tempdir().unwrap();

        let err = read_lines(temp.path()).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
    }
}
