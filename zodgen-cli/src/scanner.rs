//! Definition file scanner.
//!
//! Recursively discovers JSON definition files under a root directory,
//! respecting `.gitignore` patterns and an optional glob filter.

use crate::error::{CliError, CliResult, ScanError};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// A discovered definition file with its content.
#[derive(Debug, Clone)]
pub struct DefinitionFile {
    /// Path to the file.
    pub path: PathBuf,

    /// Path relative to the scan root.
    pub relative_path: PathBuf,

    /// File content.
    pub content: String,
}

/// Scanner for discovering definition files.
#[derive(Debug)]
pub struct DefinitionScanner {
    root: PathBuf,
    respect_gitignore: bool,
    filter: Option<glob::Pattern>,
}

impl DefinitionScanner {
    /// Create a new scanner for the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            respect_gitignore: true,
            filter: None,
        }
    }

    /// Set whether to respect .gitignore files.
    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Only include files whose path relative to the root matches `pattern`.
    pub fn with_filter(mut self, pattern: &str) -> Result<Self, ScanError> {
        let glob_pattern = glob::Pattern::new(pattern)
            .map_err(|e| ScanError::invalid_pattern(pattern, e.to_string()))?;
        self.filter = Some(glob_pattern);
        Ok(self)
    }

    /// Scan the directory and return all definition files, sorted by
    /// relative path.
    pub fn scan(&self) -> CliResult<Vec<DefinitionFile>> {
        if !self.root.exists() {
            return Err(ScanError::not_found(self.root.clone()).into());
        }

        let walker = WalkBuilder::new(&self.root)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .hidden(false)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(ScanError::Walk)?;
            let path = entry.path();

            if !path.is_file() || !is_definition_file(path) {
                continue;
            }

            let relative_path = self.relative_path(path);
            if let Some(ref pattern) = self.filter {
                if !pattern.matches_path(&relative_path) {
                    continue;
                }
            }

            let content = std::fs::read_to_string(path).map_err(|e| ScanError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

            tracing::trace!(file = %relative_path.display(), "Found definition file");
            files.push(DefinitionFile {
                path: path.to_path_buf(),
                relative_path,
                content,
            });
        }

        if files.is_empty() {
            return Err(ScanError::no_definition_files(self.root.clone()).into());
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    /// Scan without failing on empty results.
    pub fn scan_allow_empty(&self) -> CliResult<Vec<DefinitionFile>> {
        match self.scan() {
            Ok(files) => Ok(files),
            Err(CliError::Scan(ScanError::NoDefinitionFiles { .. })) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).unwrap_or(path).to_path_buf()
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Whether `path` has a `.json` extension.
pub fn is_definition_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        fs::write(dir.path().join("user.json"), r#"{"type": "string"}"#).unwrap();
        fs::write(dir.path().join("bundle.json"), r#"{}"#).unwrap();

        fs::create_dir(dir.path().join("api")).unwrap();
        fs::write(dir.path().join("api/order.json"), r#"{"type": "number"}"#).unwrap();
        fs::write(dir.path().join("api/item.json"), r#"{"type": "boolean"}"#).unwrap();

        fs::write(dir.path().join("README.md"), "# Definitions").unwrap();

        dir
    }

    fn relative_paths(files: &[DefinitionFile]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.relative_path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_scan_finds_json_files_in_order() {
        let dir = create_test_dir();
        let files = DefinitionScanner::new(dir.path()).scan().unwrap();

        assert_eq!(
            relative_paths(&files),
            vec!["api/item.json", "api/order.json", "bundle.json", "user.json"]
        );
        assert!(files.iter().all(|f| is_definition_file(&f.path)));
    }

    #[test]
    fn test_gitignore_can_be_disabled() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".gitignore"), "build/\n").unwrap();
        fs::create_dir(dir.path().join("build")).unwrap();
        fs::write(dir.path().join("build/stale.json"), "{}").unwrap();
        fs::write(dir.path().join("user.json"), "{}").unwrap();

        let respected = DefinitionScanner::new(dir.path()).scan().unwrap();
        assert_eq!(relative_paths(&respected), vec!["user.json"]);

        let all = DefinitionScanner::new(dir.path())
            .with_gitignore(false)
            .scan()
            .unwrap();
        assert_eq!(relative_paths(&all), vec!["build/stale.json", "user.json"]);
    }

    #[test]
    fn test_scan_with_filter() {
        let dir = create_test_dir();
        let scanner = DefinitionScanner::new(dir.path())
            .with_filter("api/*.json")
            .unwrap();

        let files = scanner.scan().unwrap();
        assert_eq!(relative_paths(&files), vec!["api/item.json", "api/order.json"]);
    }

    #[test]
    fn test_invalid_filter_pattern() {
        let result = DefinitionScanner::new(".").with_filter("[");
        assert!(matches!(result, Err(ScanError::InvalidPattern { .. })));
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let scanner = DefinitionScanner::new("/nonexistent/path/that/does/not/exist");
        assert!(matches!(
            scanner.scan(),
            Err(CliError::Scan(ScanError::DirectoryNotFound { .. }))
        ));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = TempDir::new().unwrap();
        let scanner = DefinitionScanner::new(dir.path());

        assert!(matches!(
            scanner.scan(),
            Err(CliError::Scan(ScanError::NoDefinitionFiles { .. }))
        ));
        assert!(scanner.scan_allow_empty().unwrap().is_empty());
    }

    #[test]
    fn test_file_content_is_read() {
        let dir = create_test_dir();
        let files = DefinitionScanner::new(dir.path())
            .with_filter("user.json")
            .unwrap()
            .scan()
            .unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].content, r#"{"type": "string"}"#);
    }
}
