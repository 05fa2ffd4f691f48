//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Foodmap CLI - Maintain the venue directory's category assignments.
#[derive(Debug, Parser)]
#[command(name = "foodmap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database path (overrides the configured default)
    #[arg(long, global = true, env = "FOODMAP_DB")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (ids only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ingest geographic feature files and seed the catalog
    Ingest(IngestArgs),

    /// Re-derive categories for stored venues and migrate stale ones
    Reconcile(ReconcileArgs),

    /// Classify a venue's text without touching the database
    Classify(ClassifyArgs),

    /// List the stored category catalog
    Categories,
}

/// Arguments for the ingest command.
#[derive(Debug, Parser)]
pub struct IngestArgs {
    /// Directory of GeoJSON feature files (partition subdirectories
    /// such as food/ and drink/ are descended into)
    pub source: PathBuf,
}

/// Arguments for the reconcile command.
#[derive(Debug, Parser)]
pub struct ReconcileArgs {
    /// Compute and print the diffs without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Abort on the first failing venue write
    #[arg(long)]
    pub fail_fast: bool,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Venue name
    pub name: String,

    /// Venue description
    #[arg(short, long)]
    pub description: Option<String>,
}
