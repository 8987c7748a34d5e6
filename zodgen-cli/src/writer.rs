//! File writer for generated modules.
//!
//! Writes the generated TypeScript module to disk, skipping the write when
//! the file on disk already holds the same content, with dry-run support.

use crate::error::{CliResult, WriteError};
use std::path::{Path, PathBuf};

/// Result of a write operation.
#[derive(Debug)]
pub enum WriteResult {
    /// File was written.
    Written {
        /// Path to the written file.
        path: PathBuf,
        /// Number of bytes written.
        bytes: usize,
    },
    /// The file already held this content.
    Unchanged {
        /// Path to the existing file.
        path: PathBuf,
    },
    /// Dry run, nothing was written.
    DryRun {
        /// Content that would have been written.
        content: String,
        /// Path where content would have been written.
        path: PathBuf,
    },
}

/// File writer with dry-run support.
#[derive(Debug)]
pub struct FileWriter {
    dry_run: bool,
}

impl FileWriter {
    /// Create a new file writer.
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Write content to a file, creating parent directories as needed.
    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteResult> {
        if self.dry_run {
            return Ok(WriteResult::DryRun {
                content: content.to_string(),
                path: path.to_path_buf(),
            });
        }

        if is_up_to_date(path, content) {
            tracing::debug!(path = %path.display(), "Output unchanged");
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        std::fs::write(path, content).map_err(|e| WriteError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote output");
        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }
}

/// Whether `path` exists and holds exactly `content`.
pub fn is_up_to_date(path: &Path, content: &str) -> bool {
    std::fs::read_to_string(path).is_ok_and(|existing| existing == content)
}

impl WriteResult {
    /// Get the path associated with this result.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. }
            | WriteResult::Unchanged { path }
            | WriteResult::DryRun { path, .. } => path,
        }
    }

    /// Check if the file was written.
    pub fn was_written(&self) -> bool {
        matches!(self, WriteResult::Written { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CONTENT: &str = "export const NameSchema = z.string();\n";

    #[test]
    fn test_write_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schemas.ts");

        let result = FileWriter::new(false).write(&path, CONTENT).unwrap();

        assert!(matches!(result, WriteResult::Written { bytes, .. } if bytes == CONTENT.len()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), CONTENT);
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/schemas.ts");

        let result = FileWriter::new(false).write(&path, CONTENT).unwrap();

        assert!(result.was_written());
        assert!(path.exists());
    }

    #[test]
    fn test_second_write_is_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schemas.ts");
        let writer = FileWriter::new(false);

        assert!(writer.write(&path, CONTENT).unwrap().was_written());
        let again = writer.write(&path, CONTENT).unwrap();
        assert!(matches!(again, WriteResult::Unchanged { .. }));
        assert_eq!(again.path(), path.as_path());

        assert!(writer.write(&path, "changed").unwrap().was_written());
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schemas.ts");

        let writer = FileWriter::new(true);

        let result = writer.write(&path, CONTENT).unwrap();
        assert!(!path.exists());
        match result {
            WriteResult::DryRun { content, .. } => assert_eq!(content, CONTENT),
            other => panic!("expected dry run, got {other:?}"),
        }
    }

    #[test]
    fn test_is_up_to_date() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schemas.ts");

        assert!(!is_up_to_date(&path, CONTENT));
        std::fs::write(&path, CONTENT).unwrap();
        assert!(is_up_to_date(&path, CONTENT));
        assert!(!is_up_to_date(&path, ""));
    }
}
