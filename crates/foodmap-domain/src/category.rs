//! Category module - the taxonomy labels venues are classified into

use std::fmt;

/// Identifier of a category in the catalog
///
/// Ids are assigned once when the catalog is seeded and are stable across
/// deployments; the rule tables reference them through [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryId(i64);

impl CategoryId {
    /// Create a CategoryId from a raw i64 value
    ///
    /// This is primarily for storage layer deserialization.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw i64 value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted catalog row: id plus display name
///
/// Unique by name. Created once via catalog seeding; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabel {
    /// Catalog id
    pub id: CategoryId,

    /// Display name, unique in the catalog
    pub name: String,
}

/// The well-known taxonomy categories
///
/// This enum is the one authoritative name/id table in the system. Both the
/// ingestion path and the reconciliation path resolve categories through it,
/// so the two can never drift apart. The persisted catalog is seeded from
/// [`Category::ALL`]; a deployment's catalog may lag behind this table,
/// which is why writers filter through the live catalog first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Generic restaurant, the baseline food label
    Restaurant,

    /// Vietnamese food
    Vietnamese,

    /// Cafe / coffee shop (also the target of the `amenity=cafe` tag)
    Cafe,

    /// Dessert and bakery
    Dessert,

    /// Seafood
    Seafood,

    /// BBQ / grill
    Bbq,

    /// Japanese food
    Japanese,

    /// Korean food
    Korean,

    /// Chinese food
    Chinese,

    /// Italian food
    Italian,

    /// Che (Vietnamese sweet soup) and related drink-dessert stalls
    Che,

    /// Ice cream
    IceCream,

    /// Fast food
    FastFood,

    /// Bar / pub
    Bar,
}

impl Category {
    /// Every well-known category, in catalog id order
    pub const ALL: [Category; 14] = [
        Category::Restaurant,
        Category::Vietnamese,
        Category::Cafe,
        Category::Dessert,
        Category::Seafood,
        Category::Bbq,
        Category::Japanese,
        Category::Korean,
        Category::Chinese,
        Category::Italian,
        Category::Che,
        Category::IceCream,
        Category::FastFood,
        Category::Bar,
    ];

    /// Get the stable catalog id
    pub const fn id(&self) -> CategoryId {
        CategoryId::new(match self {
            Category::Restaurant => 1,
            Category::Vietnamese => 2,
            Category::Cafe => 3,
            Category::Dessert => 4,
            Category::Seafood => 5,
            Category::Bbq => 6,
            Category::Japanese => 7,
            Category::Korean => 8,
            Category::Chinese => 9,
            Category::Italian => 10,
            Category::Che => 11,
            Category::IceCream => 12,
            Category::FastFood => 13,
            Category::Bar => 14,
        })
    }

    /// Get the display name as stored in the catalog
    pub fn name(&self) -> &'static str {
        match self {
            Category::Restaurant => "Restaurant",
            Category::Vietnamese => "Vietnamese",
            Category::Cafe => "Cafe",
            Category::Dessert => "Dessert",
            Category::Seafood => "Seafood",
            Category::Bbq => "BBQ",
            Category::Japanese => "Japanese",
            Category::Korean => "Korean",
            Category::Chinese => "Chinese",
            Category::Italian => "Italian",
            Category::Che => "Che",
            Category::IceCream => "Ice Cream",
            Category::FastFood => "Fast Food",
            Category::Bar => "Bar",
        }
    }

    /// Resolve a catalog id back to the well-known category
    pub fn from_id(id: CategoryId) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.id() == id)
    }

    /// Parse a category from its display name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().to_lowercase() == lower)
    }

    /// Build the catalog row for this category
    pub fn label(&self) -> CategoryLabel {
        CategoryLabel {
            id: self.id(),
            name: self.name().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable_and_unique() {
        let mut seen = Vec::new();
        for category in Category::ALL {
            let id = category.id().value();
            assert!(!seen.contains(&id), "duplicate id {}", id);
            seen.push(id);
        }
        assert_eq!(Category::Restaurant.id().value(), 1);
        assert_eq!(Category::Vietnamese.id().value(), 2);
        assert_eq!(Category::Bar.id().value(), 14);
    }

    #[test]
    fn test_from_id_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
        }
        assert_eq!(Category::from_id(CategoryId::new(999)), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Category::parse("vietnamese"), Some(Category::Vietnamese));
        assert_eq!(Category::parse("BBQ"), Some(Category::Bbq));
        assert_eq!(Category::parse("ice cream"), Some(Category::IceCream));
        assert_eq!(Category::parse("noodles"), None);
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen = Vec::new();
        for category in Category::ALL {
            let name = category.name();
            assert!(!seen.contains(&name), "duplicate name {}", name);
            seen.push(name);
        }
    }
}
