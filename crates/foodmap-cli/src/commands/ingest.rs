//! Ingest command implementation.

use crate::cli::IngestArgs;
use crate::error::{CliError, Result};
use foodmap_store::SqliteStore;
use std::path::Path;

/// Execute the ingest command.
pub fn execute_ingest(args: IngestArgs, db_path: &Path) -> Result<()> {
    if !args.source.is_dir() {
        return Err(CliError::InvalidInput(format!(
            "source '{}' is not a directory",
            args.source.display()
        )));
    }

    let mut store = SqliteStore::new(db_path)?;
    let report = foodmap_ingest::run(&args.source, &mut store)?;

    println!("{}", report.summary());
    Ok(())
}
