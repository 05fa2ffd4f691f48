//! GeoJSON feature types
//!
//! Only the subset of GeoJSON the source exports actually use: feature
//! collections of (mostly Point) features with name/cuisine/amenity
//! properties. Everything else is tolerated and ignored.

use foodmap_domain::StructuredTags;
use serde::Deserialize;

/// A GeoJSON feature collection
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    /// The features; absent means empty
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A single GeoJSON feature
#[derive(Debug, Deserialize)]
pub struct Feature {
    /// Feature properties; absent means empty
    #[serde(default)]
    pub properties: FeatureProperties,

    /// Feature geometry, if any
    pub geometry: Option<Geometry>,
}

/// The properties the ingestion path reads
#[derive(Debug, Default, Deserialize)]
pub struct FeatureProperties {
    /// Venue name; features without one are skipped
    pub name: Option<String>,

    /// Cuisine tag, e.g. `vietnamese` or `seafood;noodle`
    pub cuisine: Option<String>,

    /// Amenity tag, e.g. `restaurant`, `cafe`
    pub amenity: Option<String>,

    /// Free-text description, when the export carries one
    pub description: Option<String>,
}

impl FeatureProperties {
    /// The structured tags as the classifier expects them
    pub fn tags(&self) -> StructuredTags {
        StructuredTags {
            cuisine: self.cuisine.clone(),
            amenity: self.amenity.clone(),
        }
    }
}

/// A GeoJSON geometry
///
/// Coordinates stay untyped JSON because only Point geometries are read;
/// polygons and lines pass through [`Geometry::point`] as `None`.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    /// Geometry type, e.g. `Point`
    #[serde(rename = "type")]
    pub kind: String,

    /// Raw coordinates array
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

impl Geometry {
    /// Extract `(lat, lon)` from a Point geometry
    ///
    /// GeoJSON stores positions as `[lon, lat]`; this returns them in the
    /// latitude-first order the venue table uses.
    pub fn point(&self) -> Option<(f64, f64)> {
        if self.kind != "Point" {
            return None;
        }
        let coords = self.coordinates.as_array()?;
        let lon = coords.first()?.as_f64()?;
        let lat = coords.get(1)?.as_f64()?;
        Some((lat, lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_collection() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"name": "Phở Bò 24", "amenity": "restaurant"},
                    "geometry": {"type": "Point", "coordinates": [106.69, 10.77]}
                }
            ]
        }"#;
        let collection: FeatureCollection = serde_json::from_str(raw).unwrap();
        assert_eq!(collection.features.len(), 1);

        let feature = &collection.features[0];
        assert_eq!(feature.properties.name.as_deref(), Some("Phở Bò 24"));
        assert_eq!(feature.properties.tags().amenity.as_deref(), Some("restaurant"));
        assert_eq!(
            feature.geometry.as_ref().unwrap().point(),
            Some((10.77, 106.69))
        );
    }

    #[test]
    fn test_non_point_geometry_yields_no_coordinates() {
        let raw = r#"{"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}"#;
        let geometry: Geometry = serde_json::from_str(raw).unwrap();
        assert_eq!(geometry.point(), None);
    }

    #[test]
    fn test_missing_properties_default_to_empty() {
        let raw = r#"{"type": "Feature", "geometry": null}"#;
        let feature: Feature = serde_json::from_str(raw).unwrap();
        assert!(feature.properties.name.is_none());
        assert!(feature.geometry.is_none());
    }
}
