//! Venue module - stored venues and ingestion payloads

use crate::category::CategoryId;
use std::fmt;

/// Identifier of a stored venue
///
/// Assigned by the persistence layer on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VenueId(i64);

impl VenueId {
    /// Create a VenueId from a raw i64 value
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw i64 value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored venue as read by the classifier and the reconciler
///
/// `name` and `description` are the free-text inputs to rule evaluation.
/// `primary_category` is the legacy single-category column kept in sync
/// with the first element of the association set for older consumers; it
/// doubles as the fallback when a venue has no association rows at all.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueRecord {
    /// Unique identifier
    pub id: VenueId,

    /// Venue name
    pub name: String,

    /// Free-text description, if any
    pub description: Option<String>,

    /// Legacy scalar category column
    pub primary_category: CategoryId,
}

/// Structured geographic tags carried by an ingested feature
///
/// Only consumed by the one-time ingestion path; stored venues are
/// re-classified from text, never from tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredTags {
    /// Cuisine tag value, e.g. `vietnamese` or `seafood;noodle`
    pub cuisine: Option<String>,

    /// Amenity tag value, e.g. `restaurant`, `cafe`, `bar`
    pub amenity: Option<String>,
}

/// Payload for inserting a venue during ingestion
#[derive(Debug, Clone, PartialEq)]
pub struct NewVenue {
    /// Venue name
    pub name: String,

    /// Free-text description, if any
    pub description: Option<String>,

    /// Latitude of the feature's point geometry
    pub lat: f64,

    /// Longitude of the feature's point geometry
    pub lon: f64,

    /// Legacy scalar category column; by convention the first element of
    /// `categories`
    pub primary_category: CategoryId,

    /// Initial category association set, non-empty
    pub categories: Vec<CategoryId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_id_round_trip() {
        let id = VenueId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_structured_tags_default_is_empty() {
        let tags = StructuredTags::default();
        assert!(tags.cuisine.is_none());
        assert!(tags.amenity.is_none());
    }
}
