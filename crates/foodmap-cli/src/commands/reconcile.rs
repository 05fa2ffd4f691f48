//! Reconcile command implementation.

use crate::cli::ReconcileArgs;
use crate::error::Result;
use crate::output::Formatter;
use foodmap_domain::traits::PlaceStore;
use foodmap_reconciler::{Reconciler, ReconcilerConfig};
use foodmap_store::SqliteStore;
use std::path::Path;

/// Execute the reconcile command.
pub fn execute_reconcile(args: ReconcileArgs, db_path: &Path, formatter: &Formatter) -> Result<()> {
    let mut store = SqliteStore::new(db_path)?;

    let config = ReconcilerConfig {
        dry_run: args.dry_run,
        fail_fast: args.fail_fast,
    };
    let reconciler = Reconciler::new(config);
    let report = reconciler.run(&mut store)?;

    let catalog = store.categories()?;
    println!("{}", formatter.format_report(&report, &catalog)?);
    Ok(())
}
