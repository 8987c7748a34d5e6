//! Scan, load and generate in one pass.

use crate::config::Config;
use crate::error::{CliResult, LoadError};
use crate::generator::{GeneratedOutput, ModuleGenerator};
use crate::loader::{into_registry, DefinitionLoader};
use crate::scanner::DefinitionScanner;

/// Result of one generation pass.
#[derive(Debug)]
pub struct Build {
    /// Number of definition files scanned.
    pub files: usize,

    /// Files that failed to load. Their definitions are missing from the
    /// output.
    pub errors: Vec<LoadError>,

    /// The generated module.
    pub output: GeneratedOutput,
}

/// Scan `config.input`, load every definition and generate the module.
pub fn build(config: &Config) -> CliResult<Build> {
    let scanner = DefinitionScanner::new(&config.input.dir)
        .with_gitignore(config.input.gitignore)
        .with_filter(&config.input.pattern)?;
    let files = scanner.scan_allow_empty()?;

    let (definitions, errors) = DefinitionLoader::new().load_all(&files);
    for error in &errors {
        tracing::warn!(file = %error.file().display(), "{error}");
    }

    let registry = into_registry(definitions);
    tracing::info!(
        root = %scanner.root().display(),
        files = files.len(),
        definitions = registry.len(),
        "Generating schemas"
    );

    let output = ModuleGenerator::new(config.clone()).generate(&registry)?;
    Ok(Build {
        files: files.len(),
        errors,
        output,
    })
}
