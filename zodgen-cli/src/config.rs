//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `zodgen.toml` files
//! and merging with command-line arguments.

use crate::error::{CliResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "zodgen.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input configuration.
    pub input: InputConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Where definition files are read from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Directory scanned for definition files.
    pub dir: PathBuf,

    /// Glob matched against paths relative to `dir`.
    pub pattern: String,

    /// Whether `.gitignore` files exclude definitions.
    pub gitignore: bool,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for generated files.
    pub dir: PathBuf,

    /// Output filename.
    pub file: String,

    /// Whether to generate type inference exports.
    pub generate_types: bool,

    /// Whether to start the module with a generated-file comment.
    pub header: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./definitions"),
            pattern: "**/*.json".to_string(),
            gitignore: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./generated"),
            file: "schemas.ts".to_string(),
            generate_types: true,
            header: true,
        }
    }
}

impl Config {
    /// Full path of the generated module.
    pub fn output_path(&self) -> PathBuf {
        self.output.dir.join(&self.output.file)
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// Without a path the default `zodgen.toml` is tried and defaults are
    /// used when it does not exist. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::not_found(path.to_path_buf()).into())
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(CONFIG_FILENAME),
        };

        if !config_path.exists() {
            tracing::debug!("No configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path.clone(), e.to_string()))?;

        tracing::debug!(path = %config_path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref input) = args.input {
            config.input.dir = input.clone();
        }

        if let Some(ref filter) = args.filter {
            config.input.pattern = filter.clone();
        }

        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if let Some(ref file) = args.output_file {
            config.output.file = file.clone();
        }

        if let Some(generate_types) = args.generate_types {
            config.output.generate_types = generate_types;
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# zodgen configuration file

[input]
# Directory containing JSON type definition files
dir = "./definitions"

# Glob pattern (relative to dir) selecting definition files
pattern = "**/*.json"

# Skip files excluded by .gitignore
gitignore = true

[output]
# Output directory for generated TypeScript files
dir = "./generated"

# Output file name
file = "schemas.ts"

# Whether to generate type inference exports (export type X = z.infer<typeof XSchema>)
generate_types = true

# Whether to start the generated module with a do-not-edit comment
header = true
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Input directory override.
    pub input: Option<PathBuf>,

    /// Filter pattern override.
    pub filter: Option<String>,

    /// Output directory override.
    pub output: Option<PathBuf>,

    /// Output filename override.
    pub output_file: Option<String>,

    /// Generate types override.
    pub generate_types: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input.dir, PathBuf::from("./definitions"));
        assert_eq!(config.input.pattern, "**/*.json");
        assert!(config.input.gitignore);
        assert_eq!(config.output.dir, PathBuf::from("./generated"));
        assert_eq!(config.output.file, "schemas.ts");
        assert!(config.output.generate_types);
        assert!(config.output.header);
        assert_eq!(config.output_path(), PathBuf::from("./generated/schemas.ts"));
    }

    #[test]
    fn test_default_content_matches_defaults() {
        let config: Config = toml::from_str(ConfigManager::default_config_content()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_merge_cli_args_output() {
        let config = Config::default();
        let args = CliArgs {
            output: Some(PathBuf::from("./custom")),
            filter: Some("api/*.json".to_string()),
            ..Default::default()
        };

        let merged = ConfigManager::merge_cli_args(config, &args);
        assert_eq!(merged.output.dir, PathBuf::from("./custom"));
        assert_eq!(merged.input.pattern, "api/*.json");
    }

    #[test]
    fn test_merge_cli_args_preserves_unset() {
        let config = Config::default();
        let args = CliArgs::default();

        let merged = ConfigManager::merge_cli_args(config.clone(), &args);
        assert_eq!(merged, config);
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let toml = r#"
[input]
dir = "./types"

[output]
file = "validators.ts"
generate_types = false
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.input.dir, PathBuf::from("./types"));
        assert_eq!(config.input.pattern, "**/*.json");
        assert!(config.input.gitignore);
        assert_eq!(config.output.dir, PathBuf::from("./generated"));
        assert_eq!(config.output.file, "validators.ts");
        assert!(!config.output.generate_types);
        assert!(config.output.header);
    }

    #[test]
    fn test_load_explicit_missing_path_fails() {
        let dir = TempDir::new().unwrap();
        let result = ConfigManager::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(
            result,
            Err(crate::error::CliError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[output\nfile = 1").unwrap();

        let result = ConfigManager::load(Some(&path));
        assert!(matches!(
            result,
            Err(crate::error::CliError::Config(ConfigError::InvalidToml { .. }))
        ));
    }
}
