//! Structured-tag classification for geographic ingestion
//!
//! Unlike the text path there is no precedence here: cuisine-derived and
//! amenity-derived labels are unioned, and only the absence of any match
//! produces the baseline default. Used once, at initial geographic-data
//! ingestion; never re-run against text.

use foodmap_domain::{Category, StructuredTags};

/// Which structured tag a property rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    /// The `cuisine` tag
    Cuisine,

    /// The `amenity` tag
    Amenity,
}

/// One structured-tag rule: needles matched by substring against a tag value
#[derive(Debug, Clone, Copy)]
pub struct PropertyRule {
    /// Tag inspected
    pub field: TagField,

    /// Lowercase needles; values like `seafood;noodle` match per part
    pub needles: &'static [&'static str],

    /// Category added on match
    pub target: Category,
}

/// The property rule table
///
/// Order only determines result ordering; rules never conflict because
/// every match is unioned.
pub const PROPERTY_RULES: &[PropertyRule] = &[
    PropertyRule {
        field: TagField::Cuisine,
        needles: &["vietnamese"],
        target: Category::Vietnamese,
    },
    PropertyRule {
        field: TagField::Cuisine,
        needles: &["ice_cream", "ice cream"],
        target: Category::IceCream,
    },
    PropertyRule {
        field: TagField::Cuisine,
        needles: &["seafood", "fish"],
        target: Category::Seafood,
    },
    PropertyRule {
        field: TagField::Cuisine,
        needles: &["barbecue", "bbq", "grill"],
        target: Category::Bbq,
    },
    PropertyRule {
        field: TagField::Cuisine,
        needles: &["burger", "fast_food", "fried_chicken"],
        target: Category::FastFood,
    },
    PropertyRule {
        field: TagField::Cuisine,
        needles: &["dessert", "cake", "pastry"],
        target: Category::Dessert,
    },
    PropertyRule {
        field: TagField::Cuisine,
        needles: &["chè", "che"],
        target: Category::Che,
    },
    PropertyRule {
        field: TagField::Amenity,
        needles: &["restaurant"],
        target: Category::Restaurant,
    },
    PropertyRule {
        field: TagField::Amenity,
        needles: &["cafe", "coffee"],
        target: Category::Cafe,
    },
    PropertyRule {
        field: TagField::Amenity,
        needles: &["fast_food"],
        target: Category::FastFood,
    },
    PropertyRule {
        field: TagField::Amenity,
        needles: &["bar", "pub"],
        target: Category::Bar,
    },
];

/// Classify structured tags, defaulting to Restaurant when nothing matches
///
/// Non-empty by construction.
pub fn evaluate_tags(tags: &StructuredTags) -> Vec<Category> {
    evaluate_tags_opt(tags).unwrap_or_else(|| vec![Category::Restaurant])
}

/// Classify structured tags, `None` when no rule matched
///
/// The ingestion path uses this variant so a tagless feature can take the
/// source file's default instead of the generic Restaurant baseline.
pub fn evaluate_tags_opt(tags: &StructuredTags) -> Option<Vec<Category>> {
    let cuisine = tags.cuisine.as_deref().map(str::to_lowercase);
    let amenity = tags.amenity.as_deref().map(str::to_lowercase);

    let mut matched = Vec::new();
    for rule in PROPERTY_RULES {
        let value = match rule.field {
            TagField::Cuisine => cuisine.as_deref(),
            TagField::Amenity => amenity.as_deref(),
        };
        let Some(value) = value else { continue };
        if rule.needles.iter().any(|n| value.contains(n)) && !matched.contains(&rule.target) {
            matched.push(rule.target);
        }
    }

    if matched.is_empty() {
        None
    } else {
        Some(matched)
    }
}
