//! Source-file default categories for ingestion
//!
//! When a feature carries no structured tag any rule recognizes, the file
//! it came from decides: each known source file (or partition directory)
//! maps to one default category.

use foodmap_domain::Category;

/// Fallback when even the filename is unknown
pub const DEFAULT_CATEGORY: Category = Category::Restaurant;

/// Known source-file stems and their default categories
const FILE_DEFAULTS: &[(&str, Category)] = &[
    ("food", Category::Vietnamese),
    ("restaurant", Category::Restaurant),
    ("drink", Category::Cafe),
    ("cafe", Category::Cafe),
    ("seafood", Category::Seafood),
    ("bbq", Category::Bbq),
    ("fast_food", Category::FastFood),
    ("dessert", Category::Dessert),
    ("ice_cream", Category::IceCream),
    ("bar", Category::Bar),
];

/// Map a source-file identifier to its default category
///
/// Lookup is by lowercased basename with the extension stripped; a miss is
/// retried with hyphens normalized to underscores (`fast-food.geojson` and
/// `fast_food.geojson` are the same source), and an unknown name gets the
/// fixed default.
pub fn file_default(source_file: &str) -> Category {
    let stem = file_stem(source_file).to_lowercase();

    lookup(&stem)
        .or_else(|| lookup(&stem.replace('-', "_")))
        .unwrap_or(DEFAULT_CATEGORY)
}

fn lookup(stem: &str) -> Option<Category> {
    FILE_DEFAULTS
        .iter()
        .find(|(name, _)| *name == stem)
        .map(|(_, category)| *category)
}

fn file_stem(path: &str) -> &str {
    let basename = path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(path);
    match basename.rfind('.') {
        Some(idx) if idx > 0 => &basename[..idx],
        _ => basename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_stems() {
        assert_eq!(file_default("food.geojson"), Category::Vietnamese);
        assert_eq!(file_default("drink.geojson"), Category::Cafe);
        assert_eq!(file_default("bar.json"), Category::Bar);
    }

    #[test]
    fn test_directory_components_are_ignored() {
        assert_eq!(file_default("export/osm/seafood.geojson"), Category::Seafood);
    }

    #[test]
    fn test_hyphen_normalization() {
        assert_eq!(file_default("fast-food.geojson"), Category::FastFood);
        assert_eq!(file_default("ice-cream.geojson"), Category::IceCream);
    }

    #[test]
    fn test_unknown_name_gets_default() {
        assert_eq!(file_default("landmarks.geojson"), DEFAULT_CATEGORY);
        assert_eq!(file_default(""), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(file_default("Drink.GeoJSON"), Category::Cafe);
    }
}
