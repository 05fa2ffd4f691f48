//! Foodmap Ingestion
//!
//! One-time seeding of the venue directory from geographic feature files:
//! partitioned GeoJSON exports whose features carry a name, optional
//! cuisine/amenity tags, and point coordinates.
//!
//! Category assignment here bypasses the text rules entirely: structured
//! tags are classified by the property rule table, and a feature no
//! property rule recognizes takes the default category of the file it
//! came from. Stored venues are later re-classified from text by the
//! reconciler; this path never runs again.

#![warn(clippy::all)]

pub mod error;
pub mod feature;
pub mod ingest;

pub use error::IngestError;
pub use feature::{Feature, FeatureCollection, FeatureProperties, Geometry};
pub use ingest::{run, seed_catalog, IngestReport};
