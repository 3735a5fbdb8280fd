//! # Gantry CLI
//!
//! Command-line interface for Gantry.
//!
//! ## Commands
//!
//! - `generate` - Scaffold the migration and model for one table
//! - `batch` - Scaffold every table listed in a JSON manifest
//! - `check` - Validate a manifest without writing anything
//!

pub mod config;

pub use config::{FileConfig, load_config, resolve_generator_config};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use gantry_codegen::{Generator, TableArtifacts};
use gantry_core::Validatable;
use gantry_schema::{FieldSpec, TableSpec, load_manifest};

// ============================================================================
// Command surface
// ============================================================================

/// Schema migration and GORM model scaffolding generator
#[derive(Parser, Debug)]
#[command(name = "gantry")]
#[command(about = "Scaffold SQL migrations and model source files from table specs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scaffold the migration and model for one table
    Generate {
        /// Logical table name (singular, snake_case)
        table: String,

        /// Typed columns, in order
        #[arg(value_name = "NAME:SQL TYPE")]
        fields: Vec<FieldSpec>,

        /// Parent table this table references
        #[arg(long, value_name = "TABLE")]
        references: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Scaffold every table listed in a JSON manifest
    Batch {
        /// Path to the manifest file
        manifest: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Validate a manifest without writing anything
    Check {
        /// Path to the manifest file
        manifest: PathBuf,
    },
}

/// Output-location flags shared by the writing commands
#[derive(Args, Debug)]
struct OutputArgs {
    /// Output directory for migration files
    #[arg(long, value_name = "DIR")]
    migrations_dir: Option<PathBuf>,

    /// Output directory for model files
    #[arg(long, value_name = "DIR")]
    models_dir: Option<PathBuf>,

    /// Config file to read (defaults to ./gantry.toml if present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Render everything but write no files
    #[arg(long)]
    dry_run: bool,
}

// ============================================================================
// Entry points
// ============================================================================

/// Parse arguments from the environment and run
pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

/// Run an already parsed command line
pub fn run_with(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            table,
            fields,
            references,
            output,
        } => cmd_generate(table, fields, references, output),
        Command::Batch { manifest, output } => cmd_batch(manifest, output),
        Command::Check { manifest } => cmd_check(manifest),
    }
}

// ============================================================================
// Command handlers
// ============================================================================

fn cmd_generate(
    table: String,
    fields: Vec<FieldSpec>,
    references: Option<String>,
    output: OutputArgs,
) -> Result<()> {
    let mut spec = TableSpec::new(table).with_fields(fields);
    if let Some(reference) = references {
        spec = spec.with_reference(reference);
    }

    let mut generator = generator_for(&output)?;
    if output.dry_run {
        let artifacts = generator.build(&spec)?;
        report_dry_run(&artifacts);
    } else {
        let artifacts = generator.generate(&spec)?;
        report_created(&artifacts);
    }

    Ok(())
}

fn cmd_batch(manifest_path: PathBuf, output: OutputArgs) -> Result<()> {
    let manifest = load_manifest(&manifest_path)
        .with_context(|| format!("loading manifest {}", manifest_path.display()))?;
    manifest.validate()?;
    report_warnings(&manifest.lint());

    let mut generator = generator_for(&output)?;
    for spec in &manifest.tables {
        if output.dry_run {
            let artifacts = generator.build(spec)?;
            report_dry_run(&artifacts);
        } else {
            let artifacts = generator.generate(spec)?;
            report_created(&artifacts);
        }
    }

    Ok(())
}

fn cmd_check(manifest_path: PathBuf) -> Result<()> {
    let manifest = load_manifest(&manifest_path)
        .with_context(|| format!("loading manifest {}", manifest_path.display()))?;
    manifest.validate()?;

    for table in &manifest.tables {
        let reference = match &table.references {
            Some(r) => format!(", references {}", r),
            None => String::new(),
        };
        println!(
            "{} {} ({} fields{}) -> table {}, model {}",
            "ok".green().bold(),
            table.table_name,
            table.fields.len(),
            reference,
            table.sql_table_name(),
            table.model_name(),
        );
    }

    report_warnings(&manifest.lint());
    println!("{} {} table(s) valid", "ok".green().bold(), manifest.len());

    Ok(())
}

// ============================================================================
// Output helpers
// ============================================================================

fn generator_for(output: &OutputArgs) -> Result<Generator> {
    let file = load_config(output.config.as_deref())?;
    let config = resolve_generator_config(
        &file,
        output.migrations_dir.clone(),
        output.models_dir.clone(),
    );
    Ok(Generator::new(config))
}

fn report_created(artifacts: &TableArtifacts) {
    println!(
        "{} {}",
        "created".green().bold(),
        artifacts.migration.path().display()
    );
    println!(
        "{} {}",
        "created".green().bold(),
        artifacts.model.path().display()
    );
}

fn report_dry_run(artifacts: &TableArtifacts) {
    println!(
        "{} {}",
        "would create".yellow().bold(),
        artifacts.migration.path().display()
    );
    println!(
        "{} {}",
        "would create".yellow().bold(),
        artifacts.model.path().display()
    );
}

fn report_warnings(warnings: &[String]) {
    for warning in warnings {
        tracing::warn!("{}", warning);
        println!("{} {}", "warning:".yellow().bold(), warning);
    }
}

// ============================================================================
// Tests
// ============================================================================
