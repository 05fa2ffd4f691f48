//! Foodmap Classifier
//!
//! Deterministic rule evaluation that turns venue attributes into category
//! labels. Three independent entry points:
//!
//! - [`evaluate`]: the text classifier - an ordered tier fold over the
//!   lowercased name + description, carrying an is-restaurant gate
//! - [`evaluate_tags`]: the structured-tag classifier used during
//!   geographic ingestion (cuisine/amenity values, no precedence)
//! - [`file_default`]: the source-file fallback for ingested features that
//!   match no content rule
//!
//! All three are pure, total functions: identical input always yields an
//! identical, non-empty result, independent of call order or prior calls.
//! Keyword matching is case-insensitive and substring-based, not
//! word-boundary-based; that is inherited source behavior and several rule
//! lists rely on it (`"cà phê"` matching inside `"quán cà phê"`).

#![warn(clippy::all)]

pub mod evaluator;
pub mod filenames;
pub mod keywords;
pub mod properties;
pub mod rules;
pub mod text;

pub use evaluator::{evaluate, ClassificationContext};
pub use filenames::file_default;
pub use properties::{evaluate_tags, evaluate_tags_opt};
pub use rules::{rule_table, KeywordRule, MatchScope, Tier};
pub use text::VenueText;
