//! Foodmap Storage Layer
//!
//! Implements the [`PlaceStore`] trait on SQLite: the category catalog,
//! the venues table with its legacy scalar primary-category column, and
//! the venue/category association table.
//!
//! Category replacement is transactional per venue - the association
//! replace-all and the primary-column update commit together or not at
//! all, so a reconciliation run interleaved with application writes can
//! never leave a venue half-updated.
//!
//! # Examples
//!
//! ```no_run
//! use foodmap_store::SqliteStore;
//!
//! let store = SqliteStore::new("foodmap.db").unwrap();
//! // Store is now ready for catalog and venue operations
//! ```

#![warn(missing_docs)]

use foodmap_domain::traits::PlaceStore;
use foodmap_domain::{CategoryId, CategoryLabel, NewVenue, VenueId, VenueRecord};
use rusqlite::{params, Connection};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Venue not found
    #[error("Venue not found: {0}")]
    NotFound(String),

    /// Invalid data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of [`PlaceStore`]
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }
}

impl PlaceStore for SqliteStore {
    type Error = StoreError;

    fn categories(&self) -> Result<Vec<CategoryLabel>, Self::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(CategoryLabel {
                id: CategoryId::new(row.get(0)?),
                name: row.get(1)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn seed_category(&mut self, label: &CategoryLabel) -> Result<(), Self::Error> {
        self.conn.execute(
            "INSERT OR IGNORE INTO categories (id, name) VALUES (?1, ?2)",
            params![label.id.value(), label.name],
        )?;
        Ok(())
    }

    fn venues(&self) -> Result<Vec<VenueRecord>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, primary_category_id FROM venues ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(VenueRecord {
                id: VenueId::new(row.get(0)?),
                name: row.get(1)?,
                description: row.get(2)?,
                primary_category: CategoryId::new(row.get(3)?),
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn insert_venue(&mut self, venue: &NewVenue) -> Result<VenueId, Self::Error> {
        if venue.categories.is_empty() {
            return Err(StoreError::InvalidData(
                "venue must have at least one category".to_string(),
            ));
        }

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO venues (name, description, lat, lon, primary_category_id)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                venue.name,
                venue.description,
                venue.lat,
                venue.lon,
                venue.primary_category.value(),
            ],
        )?;
        let venue_id = tx.last_insert_rowid();
        for category in &venue.categories {
            tx.execute(
                "INSERT OR IGNORE INTO venue_categories (venue_id, category_id) VALUES (?1, ?2)",
                params![venue_id, category.value()],
            )?;
        }
        tx.commit()?;

        Ok(VenueId::new(venue_id))
    }

    fn venue_categories(&self, id: VenueId) -> Result<Vec<CategoryId>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT category_id FROM venue_categories WHERE venue_id = ?1 ORDER BY rowid",
        )?;
        let rows = stmt.query_map(params![id.value()], |row| {
            Ok(CategoryId::new(row.get(0)?))
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn replace_venue_categories(
        &mut self,
        id: VenueId,
        target: &[CategoryId],
    ) -> Result<(), Self::Error> {
        // An empty replacement would strip a venue of every label; callers
        // are expected to have filtered already, so refuse outright.
        let Some(primary) = target.first() else {
            return Err(StoreError::InvalidData(
                "refusing to replace categories with an empty set".to_string(),
            ));
        };

        let tx = self.conn.transaction()?;
        let updated = tx.execute(
            "UPDATE venues SET primary_category_id = ?1 WHERE id = ?2",
            params![primary.value(), id.value()],
        )?;
        if updated == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        tx.execute(
            "DELETE FROM venue_categories WHERE venue_id = ?1",
            params![id.value()],
        )?;
        for category in target {
            tx.execute(
                "INSERT OR IGNORE INTO venue_categories (venue_id, category_id) VALUES (?1, ?2)",
                params![id.value(), category.value()],
            )?;
        }
        tx.commit()?;

        Ok(())
    }
}
