//! Categories command implementation.

use crate::error::Result;
use crate::output::Formatter;
use foodmap_domain::traits::PlaceStore;
use foodmap_store::SqliteStore;
use std::path::Path;

/// Execute the categories command.
pub fn execute_categories(db_path: &Path, formatter: &Formatter) -> Result<()> {
    let store = SqliteStore::new(db_path)?;
    let catalog = store.categories()?;

    println!("{}", formatter.format_categories(&catalog)?);
    Ok(())
}
