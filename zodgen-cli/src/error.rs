//! Error types for the CLI.
//!
//! This module defines all error types used throughout the CLI,
//! providing detailed error messages with context for debugging.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error during definition file scanning.
    #[error("Failed to scan directory: {0}")]
    Scan(#[from] ScanError),

    /// Error loading a definition file.
    #[error("Failed to load definitions: {0}")]
    Load(#[from] LoadError),

    /// Error loading configuration.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error writing output files.
    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),

    /// Error during file watching.
    #[error("Watch error: {0}")]
    Watch(#[from] WatchError),

    /// Two definition names sanitize to the same schema identifier.
    #[error("Definitions '{first}' and '{second}' both generate {ident}")]
    DuplicateIdentifier {
        ident: String,
        first: String,
        second: String,
    },

    /// A command was asked for something it cannot do.
    #[error("{0}")]
    Usage(String),

    /// Validation failed (schemas out of date).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during definition file scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Directory does not exist.
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// No definition files found in directory.
    #[error("No definition files found in: {path}")]
    NoDefinitionFiles { path: PathBuf },

    /// Invalid filter pattern.
    #[error("Invalid filter pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// IO error during scanning.
    #[error("IO error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from ignore crate walker.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Error loading a definition file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is not valid JSON.
    #[error("Invalid JSON in {file}: {source}")]
    Json {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an object.
    #[error("Expected a definition or an object of named definitions in {file}")]
    NotAnObject { file: PathBuf },

    /// A definition does not decode.
    #[error("Invalid definition '{name}' in {file}: {source}")]
    Definition {
        file: PathBuf,
        name: String,
        #[source]
        source: zodgen::GenerateError,
    },

    /// The file name cannot name a definition.
    #[error("Cannot derive a definition name from {file}")]
    Unnamed { file: PathBuf },
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file not found.
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid TOML syntax.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// IO error reading config.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create directory.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error during file watching.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Failed to initialize watcher.
    #[error("Failed to initialize file watcher: {0}")]
    Init(String),

    /// Error from notify crate.
    #[error("Watch notification error: {0}")]
    Notify(String),
}

impl ScanError {
    /// Create a directory not found error.
    pub fn not_found(path: PathBuf) -> Self {
        Self::DirectoryNotFound { path }
    }

    /// Create a no definition files error.
    pub fn no_definition_files(path: PathBuf) -> Self {
        Self::NoDefinitionFiles { path }
    }

    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

impl LoadError {
    /// Create an invalid definition error.
    pub fn definition(
        file: PathBuf,
        name: impl Into<String>,
        source: zodgen::GenerateError,
    ) -> Self {
        Self::Definition {
            file,
            name: name.into(),
            source,
        }
    }

    /// The file this error refers to.
    pub fn file(&self) -> &std::path::Path {
        match self {
            Self::Json { file, .. }
            | Self::NotAnObject { file }
            | Self::Definition { file, .. }
            | Self::Unnamed { file } => file,
        }
    }
}

impl ConfigError {
    /// Create a not found error.
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    /// Create an invalid TOML error.
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }
}

impl CliError {
    /// Process exit code: 2 for an out-of-date module, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            _ => 1,
        }
    }

    /// Create a duplicate identifier error.
    pub fn duplicate_identifier(
        ident: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::DuplicateIdentifier {
            ident: ident.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_error_names_the_kind() {
        let err = LoadError::definition(
            PathBuf::from("defs/user.json"),
            "User",
            zodgen::GenerateError::unknown_kind("bigint"),
        );
        assert_eq!(
            err.to_string(),
            "Invalid definition 'User' in defs/user.json: Unknown type kind: bigint"
        );
        assert_eq!(err.file(), std::path::Path::new("defs/user.json"));
    }

    #[test]
    fn test_cli_error_wraps_scan_error() {
        let err: CliError = ScanError::invalid_pattern("[", "unclosed").into();
        assert_eq!(
            err.to_string(),
            "Failed to scan directory: Invalid filter pattern '[': unclosed"
        );
    }

    #[test]
    fn test_only_validation_exits_with_two() {
        assert_eq!(CliError::Validation("stale".to_string()).exit_code(), 2);
        assert_eq!(CliError::Usage("exists".to_string()).exit_code(), 1);
        assert_eq!(
            CliError::duplicate_identifier("a_bSchema", "a.b", "a-b").exit_code(),
            1
        );
    }

    #[test]
    fn test_duplicate_identifier_names_both_definitions() {
        let err = CliError::duplicate_identifier("a_bSchema", "a.b", "a-b");
        assert_eq!(
            err.to_string(),
            "Definitions 'a.b' and 'a-b' both generate a_bSchema"
        );
    }
}
