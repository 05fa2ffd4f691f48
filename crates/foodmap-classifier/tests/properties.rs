//! Property tests for the classifier's contract: pure, total, non-empty.

use foodmap_classifier::evaluate;
use foodmap_domain::Category;
use proptest::prelude::*;

proptest! {
    #[test]
    fn evaluate_is_deterministic(name in ".*", description in proptest::option::of(".*")) {
        let first = evaluate(&name, description.as_deref());
        let second = evaluate(&name, description.as_deref());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn evaluate_is_never_empty(name in ".*", description in proptest::option::of(".*")) {
        prop_assert!(!evaluate(&name, description.as_deref()).is_empty());
    }

    #[test]
    fn evaluate_never_duplicates_labels(name in ".*", description in proptest::option::of(".*")) {
        let labels = evaluate(&name, description.as_deref());
        let unique: std::collections::HashSet<_> = labels.iter().collect();
        prop_assert_eq!(unique.len(), labels.len());
    }

    // A description with a generic food keyword turns the gate on, and the
    // gate keeps the drink/dessert tiers out of the result no matter what
    // the name contains.
    #[test]
    fn gate_suppresses_cafe_and_dessert(name in ".*") {
        let labels = evaluate(&name, Some("quán ăn nhà hàng"));
        prop_assert!(!labels.contains(&Category::Cafe));
        prop_assert!(!labels.contains(&Category::Dessert));
    }
}
