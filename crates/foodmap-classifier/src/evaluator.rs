//! The tier-fold rule evaluator
//!
//! [`evaluate`] walks the ordered rule table against a venue's normalized
//! text, threading an immutable [`ClassificationContext`] through the fold
//! and stopping at the first short-circuiting tier. The result is a
//! deduplicated, insertion-ordered, non-empty category list.

use crate::keywords::{CAFE_MARKER, RESTAURANT_MARKER};
use crate::rules::{rule_table, KeywordRule, Tier, SPECIFIC_LABELS};
use crate::text::VenueText;
use foodmap_domain::Category;

/// Accumulated evaluation state, one per venue
///
/// Never mutated in place: each tier produces a [`TierOutcome`] and the
/// fold builds the next context from it.
#[derive(Debug, Clone, Default)]
pub struct ClassificationContext {
    labels: Vec<Category>,
    is_restaurant: bool,
}

impl ClassificationContext {
    /// Labels matched so far, in tier order, deduplicated
    pub fn labels(&self) -> &[Category] {
        &self.labels
    }

    /// Whether any food-restaurant signal has fired yet
    pub fn is_restaurant(&self) -> bool {
        self.is_restaurant
    }

    /// Build the successor context from a tier's outcome
    fn apply(&self, outcome: &TierOutcome) -> Self {
        let mut labels = self.labels.clone();
        for label in &outcome.add {
            if !labels.contains(label) {
                labels.push(*label);
            }
        }
        Self {
            labels,
            is_restaurant: self.is_restaurant || outcome.set_gate,
        }
    }
}

/// What one tier contributes: labels to add, the gate, and whether the
/// fold stops here
#[derive(Debug, Clone, Default)]
struct TierOutcome {
    add: Vec<Category>,
    set_gate: bool,
    short_circuit: bool,
}

impl TierOutcome {
    fn nothing() -> Self {
        Self::default()
    }
}

/// Classify a venue's free text into category labels
///
/// Pure and total: always terminates with at least one label, and
/// identical input always yields identical output. Precedence is the
/// fixed order of [`rule_table`]; ties are broken by insertion order
/// (earlier tier wins positionally, but all matched labels are kept -
/// this is a multi-label classifier).
pub fn evaluate(name: &str, description: Option<&str>) -> Vec<Category> {
    let text = VenueText::new(name, description);
    let mut ctx = ClassificationContext::default();

    for tier in rule_table() {
        let outcome = apply_tier(tier, &text, &ctx);
        let stop = outcome.short_circuit;
        ctx = ctx.apply(&outcome);
        if stop {
            break;
        }
    }

    ctx.labels
}

fn apply_tier(tier: &Tier, text: &VenueText, ctx: &ClassificationContext) -> TierOutcome {
    match tier {
        Tier::Keywords(rule) => apply_keyword_rule(rule, text, ctx),
        Tier::ParentheticalMarkers => apply_markers(text, ctx),
        Tier::CatchAll => apply_catch_all(ctx),
        Tier::Fallback => apply_fallback(ctx),
    }
}

fn apply_keyword_rule(
    rule: &KeywordRule,
    text: &VenueText,
    ctx: &ClassificationContext,
) -> TierOutcome {
    if rule.gated && ctx.is_restaurant() {
        return TierOutcome::nothing();
    }
    if !rule.matches(text) {
        return TierOutcome::nothing();
    }
    TierOutcome {
        add: vec![rule.target],
        set_gate: rule.sets_gate,
        // An exclusive tier terminates evaluation only when it is the sole
        // match so far. A later cuisine keyword in the same text is
        // silently dropped; that precedence is inherited source behavior,
        // kept as-is (see che_beats_seafood_when_both_match).
        short_circuit: rule.exclusive && ctx.labels().is_empty(),
    }
}

fn apply_markers(text: &VenueText, ctx: &ClassificationContext) -> TierOutcome {
    if text.description.contains(RESTAURANT_MARKER) {
        return TierOutcome {
            add: vec![Category::Vietnamese],
            set_gate: true,
            short_circuit: false,
        };
    }
    // A gate that is still off here means no food keyword matched either
    // field, so a cafe marker decides the venue outright.
    if !ctx.is_restaurant() && text.description.contains(CAFE_MARKER) {
        return TierOutcome {
            add: vec![Category::Cafe],
            set_gate: false,
            short_circuit: true,
        };
    }
    TierOutcome::nothing()
}

fn apply_catch_all(ctx: &ClassificationContext) -> TierOutcome {
    let has_specific = ctx.labels().iter().any(|l| SPECIFIC_LABELS.contains(l));
    if ctx.is_restaurant() && !has_specific {
        return TierOutcome {
            add: vec![Category::Vietnamese],
            set_gate: false,
            short_circuit: false,
        };
    }
    TierOutcome::nothing()
}

fn apply_fallback(ctx: &ClassificationContext) -> TierOutcome {
    if !ctx.labels().is_empty() {
        return TierOutcome::nothing();
    }
    let label = if ctx.is_restaurant() {
        Category::Restaurant
    } else {
        Category::Vietnamese
    };
    TierOutcome {
        add: vec![label],
        set_gate: false,
        short_circuit: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let first = evaluate("Phở Bò 24", Some("quán phở gia truyền"));
        let second = evaluate("Phở Bò 24", Some("quán phở gia truyền"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_falls_back_to_vietnamese() {
        assert_eq!(evaluate("", None), vec![Category::Vietnamese]);
        assert_eq!(evaluate("", Some("")), vec![Category::Vietnamese]);
    }

    #[test]
    fn test_che_short_circuits() {
        assert_eq!(evaluate("Chè Thái Cô Ba", None), vec![Category::Che]);
    }

    #[test]
    fn test_seafood_short_circuits_before_generic() {
        // "nhà hàng" is a generic keyword, but the seafood tier runs first
        // and returns alone.
        assert_eq!(
            evaluate("Nhà hàng Hải Sản Biển Đông", None),
            vec![Category::Seafood]
        );
    }

    #[test]
    fn test_che_beats_seafood_when_both_match() {
        // Known precedence behavior: the first-matching exclusive tier has
        // absolute priority and the seafood label is dropped.
        assert_eq!(evaluate("Chè & Ốc Xuân", None), vec![Category::Che]);
    }

    #[test]
    fn test_dish_keyword_yields_vietnamese() {
        assert_eq!(evaluate("Phở Bò 24", None), vec![Category::Vietnamese]);
        assert_eq!(evaluate("Gỏi Cuốn Cô Ba", None), vec![Category::Vietnamese]);
    }

    #[test]
    fn test_cafe_only_name() {
        assert_eq!(evaluate("ABC Cafe", None), vec![Category::Cafe]);
    }

    #[test]
    fn test_restaurant_marker_beats_cafe_mention() {
        let labels = evaluate("Quán Số 5", Some("(restaurant) địa điểm nổi tiếng"));
        assert!(labels.contains(&Category::Vietnamese));
        assert!(!labels.contains(&Category::Cafe));

        // Even with a cafe word later in the same description.
        let labels = evaluate("Quán Số 5", Some("(restaurant) có bán cà phê"));
        assert!(labels.contains(&Category::Vietnamese));
        assert!(!labels.contains(&Category::Cafe));
    }

    #[test]
    fn test_cafe_marker_decides_when_gate_off() {
        assert_eq!(
            evaluate("Quán Số 5", Some("(cafe) view đẹp")),
            vec![Category::Cafe]
        );
    }

    #[test]
    fn test_gate_suppresses_cafe_and_dessert() {
        let labels = evaluate("Quán ăn Ngon", Some("có cà phê và bánh ngọt tráng miệng"));
        assert!(labels.contains(&Category::Vietnamese));
        assert!(!labels.contains(&Category::Cafe));
        assert!(!labels.contains(&Category::Dessert));
    }

    #[test]
    fn test_multi_label_cuisines() {
        // A Korean BBQ venue keeps both facets, in tier order.
        assert_eq!(
            evaluate("Gogi House", Some("thịt nướng hàn quốc")),
            vec![Category::Bbq, Category::Korean]
        );
    }

    #[test]
    fn test_generic_plus_cuisine_keeps_first_guess() {
        // Generic tier adds Vietnamese, the sushi tier adds Japanese; the
        // catch-all does not remove the first guess.
        assert_eq!(
            evaluate("Nhà hàng Sushi Sakura", None),
            vec![Category::Vietnamese, Category::Japanese]
        );
    }

    #[test]
    fn test_dessert_when_gate_off() {
        assert_eq!(
            evaluate("Tiệm bánh ngọt Anh Hòa", None),
            vec![Category::Dessert]
        );
    }

    #[test]
    fn test_cafe_keyword_in_description_only() {
        assert_eq!(
            evaluate("Nắng Sài Gòn", Some("quán cà phê sân vườn")),
            vec![Category::Cafe]
        );
    }

    #[test]
    fn test_result_has_no_duplicates() {
        // "bún chả" hits both the generic tier ("bún") and the dish tier.
        let labels = evaluate("Bún Chả Hà Nội", Some("bún chả than hoa"));
        let unique: std::collections::HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), labels.len());
        assert!(labels.contains(&Category::Vietnamese));
    }
}
