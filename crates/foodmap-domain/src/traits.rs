//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and
//! infrastructure. The SQLite implementation lives in foodmap-store;
//! tests substitute in-memory mocks.

use crate::category::{CategoryId, CategoryLabel};
use crate::venue::{NewVenue, VenueId, VenueRecord};

/// Trait for the category catalog and venue/category associations
///
/// Implemented by the infrastructure layer (foodmap-store). The reconciler
/// and the ingestor are generic over this trait so they can be exercised
/// against in-memory stores in tests.
pub trait PlaceStore {
    /// Error type for store operations
    type Error;

    /// List the full category catalog
    fn categories(&self) -> Result<Vec<CategoryLabel>, Self::Error>;

    /// Insert a catalog row if it is not already present
    ///
    /// Seeding is idempotent: re-seeding an existing id is a no-op.
    fn seed_category(&mut self, label: &CategoryLabel) -> Result<(), Self::Error>;

    /// List all stored venues
    fn venues(&self) -> Result<Vec<VenueRecord>, Self::Error>;

    /// Insert a venue together with its initial category associations
    fn insert_venue(&mut self, venue: &NewVenue) -> Result<VenueId, Self::Error>;

    /// Get a venue's current category association set
    ///
    /// Returns an empty vector when the venue has no association rows;
    /// callers fall back to the legacy primary column in that case.
    fn venue_categories(&self, id: VenueId) -> Result<Vec<CategoryId>, Self::Error>;

    /// Replace a venue's category associations with `target`
    ///
    /// Replace-all semantics: existing association rows are cleared, the
    /// target set is inserted, and the legacy primary column is set to the
    /// first element - all inside a single transaction so a concurrent
    /// writer can never observe a half-applied update. `target` must be
    /// non-empty; the reconciler's divergence guard enforces this before
    /// calling.
    fn replace_venue_categories(
        &mut self,
        id: VenueId,
        target: &[CategoryId],
    ) -> Result<(), Self::Error>;
}
