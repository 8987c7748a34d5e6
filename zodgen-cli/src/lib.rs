//! # zodgen-cli
//!
//! CLI library for generating TypeScript Zod schemas from JSON type
//! definitions.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`scanner`] - Definition file discovery and filtering
//! - [`loader`] - JSON decoding into registry entries
//! - [`generator`] - Module generation on top of [`zodgen`]
//! - [`pipeline`] - Scan, load and generate in one pass
//! - [`writer`] - File output and dry-run support
//! - [`watcher`] - File system watching for development mode
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod generator;
pub mod loader;
pub mod pipeline;
pub mod scanner;
pub mod watcher;
pub mod writer;

pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use generator::{GeneratedOutput, ModuleGenerator};
pub use loader::{DefinitionLoader, LoadedDefinition};
pub use pipeline::{build, Build};
pub use scanner::{DefinitionFile, DefinitionScanner};
pub use watcher::FileWatcher;
pub use writer::FileWriter;
