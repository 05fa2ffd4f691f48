//! Text normalization for rule matching

/// Lowercased views of a venue's free text
///
/// Most tiers match against `combined`; the tiers that the precedence chain
/// checks per-field (generic restaurant, cafe) use `name` and
/// `description` separately so a keyword spanning the field boundary never
/// produces a spurious match.
#[derive(Debug, Clone)]
pub struct VenueText {
    /// Lowercased venue name
    pub name: String,

    /// Lowercased description; empty string when the venue has none
    pub description: String,

    /// `name` and `description` joined with a single space
    pub combined: String,
}

impl VenueText {
    /// Normalize a venue's name and optional description
    pub fn new(name: &str, description: Option<&str>) -> Self {
        let name = name.to_lowercase();
        let description = description.unwrap_or("").to_lowercase();
        let combined = if description.is_empty() {
            name.clone()
        } else {
            format!("{} {}", name, description)
        };
        Self {
            name,
            description,
            combined,
        }
    }
}

/// Substring containment against a keyword list
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}
