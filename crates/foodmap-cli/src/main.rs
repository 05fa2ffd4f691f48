//! Foodmap CLI - command-line interface for the venue directory's
//! classification and reconciliation tooling.

use clap::Parser;
use foodmap_cli::commands;
use foodmap_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config from the explicit path, or the default location
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|_| {
            let cfg = Config::default();
            cfg.save().ok();
            cfg
        }),
    };

    // Determine output format and color setting
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    // Database path: flag/env wins over config
    let db_path = cli.db.clone().unwrap_or(config.db_path);
    tracing::debug!("Using database {}", db_path.display());

    match cli.command {
        Command::Ingest(args) => commands::execute_ingest(args, &db_path)?,
        Command::Reconcile(args) => commands::execute_reconcile(args, &db_path, &formatter)?,
        Command::Classify(args) => commands::execute_classify(args, &formatter)?,
        Command::Categories => commands::execute_categories(&db_path, &formatter)?,
    }

    Ok(())
}
