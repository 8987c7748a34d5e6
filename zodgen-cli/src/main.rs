//! # zodgen
//!
//! CLI tool for generating TypeScript Zod schemas from JSON type definitions.
//!
//! ## Usage
//!
//! ```bash
//! # Generate schemas from ./definitions
//! zodgen generate
//!
//! # Generate schemas to a specific output directory
//! zodgen generate --input ./definitions --output ./generated
//!
//! # Watch mode for development
//! zodgen generate --watch
//!
//! # Dry run to preview changes
//! zodgen generate --dry-run
//!
//! # Print the schema for a single definition file
//! zodgen print ./definitions/User.json
//!
//! # Initialize configuration
//! zodgen init
//!
//! # Validate schemas are up-to-date
//! zodgen validate --path ./generated/schemas.ts
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use zodgen::Generator;
use zodgen_cli::{
    config::{CliArgs, Config, ConfigManager, CONFIG_FILENAME},
    error::{CliError, LoadError},
    loader::{into_registry, DefinitionLoader},
    pipeline::{build, Build},
    watcher::{FileWatcher, WatchEvent},
    writer::{FileWriter, WriteResult},
};

#[derive(Parser)]
#[command(name = "zodgen")]
#[command(author, version, about = "Generate TypeScript Zod schemas from JSON type definitions", long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a TypeScript module from definition files
    Generate {
        /// Input directory containing JSON definition files
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory for the generated module
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file name
        #[arg(long)]
        file: Option<String>,

        /// Skip `export type` declarations
        #[arg(long)]
        no_types: bool,

        /// Watch for file changes and regenerate
        #[arg(short, long)]
        watch: bool,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Only load definition files matching this glob (relative to input)
        #[arg(long)]
        filter: Option<String>,
    },

    /// Print the schema expression for each definition in one file
    Print {
        /// Definition file
        file: PathBuf,

        /// Only print this definition
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Initialize a new zodgen configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = CONFIG_FILENAME)]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Validate that a generated module is up-to-date
    Validate {
        /// Path to the generated module (defaults to the configured output)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Input directory containing JSON definition files
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Generate {
            input,
            output,
            file,
            no_types,
            watch,
            dry_run,
            config,
            filter,
        } => {
            let args = CliArgs {
                input,
                filter,
                output,
                output_file: file,
                generate_types: no_types.then_some(false),
            };
            cmd_generate(config.as_deref(), &args, watch, dry_run)
        }

        Commands::Print { file, name } => cmd_print(&file, name.as_deref()),

        Commands::Init { output, force } => cmd_init(&output, force),

        Commands::Validate {
            path,
            input,
            config,
        } => cmd_validate(path, input, config.as_deref()),
    }
}

/// Generate command implementation.
fn cmd_generate(
    config_path: Option<&Path>,
    args: &CliArgs,
    watch: bool,
    dry_run: bool,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path)?;
    let config = ConfigManager::merge_cli_args(config, args);

    if watch {
        run_watch_mode(&config, dry_run)
    } else {
        run_generate(&config, dry_run)
    }
}

/// Run schema generation once.
fn run_generate(config: &Config, dry_run: bool) -> Result<(), CliError> {
    println!(
        "{} {}",
        "Scanning for definitions in".cyan(),
        config.input.dir.display()
    );

    let Build {
        files,
        errors,
        output,
    } = build(config)?;

    if files == 0 {
        println!("{}", "No definition files found.".yellow());
        return Ok(());
    }
    println!("  Found {} definition file(s)", files.to_string().green());

    if !errors.is_empty() {
        println!("{} {} file(s) failed to load:", "Warning:".yellow(), errors.len());
        for error in &errors {
            println!("  {}", format_load_error(error));
        }
    }

    println!(
        "  Generated {} schema(s)",
        output.schemas.len().to_string().green()
    );

    for name in &output.unresolved {
        println!(
            "{} '{}' is referenced but never defined",
            "Warning:".yellow(),
            name
        );
    }

    let writer = FileWriter::new(dry_run);
    match writer.write(&config.output_path(), &output.content)? {
        WriteResult::Written { path, bytes } => {
            println!(
                "{} Written {} bytes to {}",
                "✓".green(),
                bytes,
                path.display()
            );
        }
        WriteResult::Unchanged { path } => {
            println!("{} {} is up-to-date", "✓".green(), path.display());
        }
        WriteResult::DryRun { content, path } => {
            println!(
                "{} Would write to {}:",
                "[dry-run]".yellow(),
                path.display()
            );
            println!("{}", "─".repeat(60).dimmed());
            println!("{}", content);
            println!("{}", "─".repeat(60).dimmed());
        }
    }

    Ok(())
}

/// Run in watch mode.
fn run_watch_mode(config: &Config, dry_run: bool) -> Result<(), CliError> {
    let watcher = FileWatcher::new(&config.input.dir);

    println!("{}", "Starting watch mode...".cyan());
    println!("  Watching: {}", watcher.root().display());
    println!("  Press Ctrl+C to stop\n");

    run_generate(config, dry_run)?;

    let (_debouncer, rx) = watcher.watch()?;

    println!("\n{}", "Watching for changes...".cyan());

    while let Ok(event) = rx.recv() {
        let label = match &event {
            WatchEvent::Error(e) => {
                println!("{} {}", "Watch error:".red(), e);
                continue;
            }
            WatchEvent::Changed(_) => "File changed:",
            WatchEvent::Removed(_) => "File removed:",
        };
        if let Some(path) = event.path() {
            println!("\n{} {}", label.cyan(), path.display());
        }

        if let Err(e) = run_generate(config, dry_run) {
            println!("{} {}", "Generation error:".red(), e);
        }

        println!("\n{}", "Watching for changes...".cyan());
    }

    Ok(())
}

/// Print command implementation.
fn cmd_print(file: &Path, name: Option<&str>) -> Result<(), CliError> {
    let content = std::fs::read_to_string(file)?;
    let definitions = DefinitionLoader::new().load_source(&content, file)?;
    let registry = into_registry(definitions);

    let names: Vec<&str> = match name {
        Some(name) if registry.contains(name) => vec![name],
        Some(name) => {
            return Err(CliError::Usage(format!(
                "No definition named '{}' in {}",
                name,
                file.display()
            )))
        }
        None => registry.names().collect(),
    };

    let mut generator = Generator::new(&registry);
    for name in names {
        if let Some(schema) = generator.generate_named(name) {
            println!("{} {}", format!("{name}:").as_str().bold(), schema);
        }
    }

    for deferred in generator.deferred() {
        tracing::info!(name = %deferred.name, reason = ?deferred.reason, "Lazy handle");
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: &Path, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        return Err(CliError::Usage(format!(
            "Configuration file already exists: {} (use --force to overwrite)",
            output.display()
        )));
    }

    std::fs::write(output, ConfigManager::default_config_content())?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Validate command implementation.
fn cmd_validate(
    schema_path: Option<PathBuf>,
    input: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<(), CliError> {
    println!("{}", "Validating schemas...".cyan());

    let config = ConfigManager::load(config_path)?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            input,
            ..Default::default()
        },
    );
    let schema_path = schema_path.unwrap_or_else(|| config.output_path());

    if !schema_path.exists() {
        return Err(CliError::Validation(format!(
            "Schema file not found: {}",
            schema_path.display()
        )));
    }
    let existing_content = std::fs::read_to_string(&schema_path)?;

    let Build { errors, output, .. } = build(&config)?;
    if let Some(error) = errors.into_iter().next() {
        return Err(error.into());
    }

    if existing_content.trim() == output.content.trim() {
        println!("{} Schemas are up-to-date", "✓".green());
        Ok(())
    } else {
        println!("{} Schemas are out of date", "✗".red());
        println!("  Run 'zodgen generate' to update");
        Err(CliError::Validation("Schemas are out of date".to_string()))
    }
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}

/// Format a load error for display.
fn format_load_error(error: &LoadError) -> String {
    match error {
        LoadError::Json { file, source } => {
            format!("{}:{}:{}: {}", file.display(), source.line(), source.column(), source)
        }
        LoadError::Definition { name, source, .. } => {
            format!("{}: '{}': {}", error.file().display(), name, source)
        }
        LoadError::NotAnObject { .. } | LoadError::Unnamed { .. } => error.to_string(),
    }
}
