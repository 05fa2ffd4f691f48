//! The ordered rule table for text classification
//!
//! Precedence lives here, in one place: [`rule_table`] returns the tiers
//! in evaluation order, keyword tiers as data and the three structural
//! steps (markers, catch-all, fallback) as named variants. The table is
//! total and fixed; it is never reordered at runtime.

use crate::keywords;
use crate::text::{contains_any, VenueText};
use foodmap_domain::Category;

/// Which text view a keyword tier matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope {
    /// Match the name+description concatenation
    Combined,

    /// Match the name and the description independently
    ///
    /// Equivalent to `Combined` except that a keyword can never match
    /// across the field boundary.
    NameOrDescription,
}

/// One keyword tier of the precedence chain
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    /// Precedence, ascending = evaluated first; unique within the table
    pub tier: u8,

    /// Category added when this tier matches
    pub target: Category,

    /// Lowercase keywords, matched by substring
    pub keywords: &'static [&'static str],

    /// Text view the keywords are matched against
    pub scope: MatchScope,

    /// Whether a match turns on the is-restaurant gate
    pub sets_gate: bool,

    /// Whether this tier only runs while the gate is still off
    pub gated: bool,

    /// Whether a match short-circuits evaluation when nothing matched
    /// before this tier
    pub exclusive: bool,
}

impl KeywordRule {
    /// Test this tier's keywords against the normalized text
    pub fn matches(&self, text: &VenueText) -> bool {
        match self.scope {
            MatchScope::Combined => contains_any(&text.combined, self.keywords),
            MatchScope::NameOrDescription => {
                contains_any(&text.name, self.keywords)
                    || contains_any(&text.description, self.keywords)
            }
        }
    }
}

/// One tier of the precedence chain
#[derive(Debug, Clone, Copy)]
pub enum Tier {
    /// A keyword tier, driven by [`KeywordRule`] data
    Keywords(KeywordRule),

    /// The `(restaurant)` / `(cafe)` description-marker tier
    ParentheticalMarkers,

    /// Ensure Vietnamese is present when the gate fired but no specific
    /// cuisine label did
    CatchAll,

    /// Terminal step: an empty result set gets the baseline label
    Fallback,
}

const RULE_TABLE: &[Tier] = &[
    // Drink-exclusive: che stalls never mix with the restaurant catch-all.
    Tier::Keywords(KeywordRule {
        tier: 1,
        target: Category::Che,
        keywords: keywords::CHE,
        scope: MatchScope::Combined,
        sets_gate: false,
        gated: false,
        exclusive: true,
    }),
    // Seafood short-circuits before the generic tier can also fire.
    Tier::Keywords(KeywordRule {
        tier: 2,
        target: Category::Seafood,
        keywords: keywords::SEAFOOD,
        scope: MatchScope::Combined,
        sets_gate: true,
        gated: false,
        exclusive: true,
    }),
    // Generic restaurant: sets the gate, Vietnamese as a first guess.
    Tier::Keywords(KeywordRule {
        tier: 3,
        target: Category::Vietnamese,
        keywords: keywords::GENERIC_RESTAURANT,
        scope: MatchScope::NameOrDescription,
        sets_gate: true,
        gated: false,
        exclusive: false,
    }),
    Tier::ParentheticalMarkers,
    // Specific cuisines: non-exclusive, several may fire on one venue.
    Tier::Keywords(KeywordRule {
        tier: 5,
        target: Category::Bbq,
        keywords: keywords::BBQ,
        scope: MatchScope::Combined,
        sets_gate: true,
        gated: false,
        exclusive: false,
    }),
    Tier::Keywords(KeywordRule {
        tier: 6,
        target: Category::Japanese,
        keywords: keywords::JAPANESE,
        scope: MatchScope::Combined,
        sets_gate: true,
        gated: false,
        exclusive: false,
    }),
    Tier::Keywords(KeywordRule {
        tier: 7,
        target: Category::Korean,
        keywords: keywords::KOREAN,
        scope: MatchScope::Combined,
        sets_gate: true,
        gated: false,
        exclusive: false,
    }),
    Tier::Keywords(KeywordRule {
        tier: 8,
        target: Category::Chinese,
        keywords: keywords::CHINESE,
        scope: MatchScope::Combined,
        sets_gate: true,
        gated: false,
        exclusive: false,
    }),
    Tier::Keywords(KeywordRule {
        tier: 9,
        target: Category::Italian,
        keywords: keywords::ITALIAN,
        scope: MatchScope::Combined,
        sets_gate: true,
        gated: false,
        exclusive: false,
    }),
    // Named Vietnamese dishes identify the cuisine even without a generic
    // food word in the text.
    Tier::Keywords(KeywordRule {
        tier: 10,
        target: Category::Vietnamese,
        keywords: keywords::VIETNAMESE_DISHES,
        scope: MatchScope::Combined,
        sets_gate: true,
        gated: false,
        exclusive: false,
    }),
    Tier::CatchAll,
    // Drink/dessert tiers only run while the gate is still off.
    Tier::Keywords(KeywordRule {
        tier: 12,
        target: Category::Cafe,
        keywords: keywords::CAFE,
        scope: MatchScope::NameOrDescription,
        sets_gate: false,
        gated: true,
        exclusive: false,
    }),
    Tier::Keywords(KeywordRule {
        tier: 13,
        target: Category::Dessert,
        keywords: keywords::DESSERT,
        scope: MatchScope::Combined,
        sets_gate: false,
        gated: true,
        exclusive: false,
    }),
    Tier::Fallback,
];

/// The full precedence chain in evaluation order
pub fn rule_table() -> &'static [Tier] {
    RULE_TABLE
}

/// Labels counted as "specific" by the catch-all step
///
/// When the gate fired but none of these is present, the venue falls back
/// to plain Vietnamese.
pub const SPECIFIC_LABELS: &[Category] = &[
    Category::Bbq,
    Category::Japanese,
    Category::Korean,
    Category::Chinese,
    Category::Italian,
    Category::Seafood,
    Category::Che,
];
