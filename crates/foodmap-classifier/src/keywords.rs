//! Keyword tables for the text classification tiers
//!
//! All entries are lowercase and matched by substring containment. Lists
//! are ordered roughly by how often they hit in the source data; order
//! inside a list has no semantic effect.

/// Che and related sweet-soup/drink-stall terms (exclusive tier)
pub const CHE: &[&str] = &["chè", "tào phớ", "sâm bổ lượng", "tàu hũ"];

/// Seafood terms (exclusive tier)
pub const SEAFOOD: &[&str] = &[
    "hải sản",
    "seafood",
    "ốc",
    "hàu",
    "ghẹ",
    "tôm hùm",
    "cua biển",
];

/// Broad restaurant/food terms for the generic tier
///
/// BBQ/grill and dimsum tokens are deliberately absent - those belong to
/// the specific-cuisine tiers below.
pub const GENERIC_RESTAURANT: &[&str] = &[
    "nhà hàng",
    "quán ăn",
    "quán nhậu",
    "restaurant",
    "cơm",
    "phở",
    "bún",
    "lẩu",
    "mì",
    "miến",
    "cháo",
    "xôi",
    "hủ tiếu",
    "bánh mì",
    "gà rán",
];

/// BBQ / grill terms
pub const BBQ: &[&str] = &["bbq", "nướng", "grill", "barbecue"];

/// Japanese cuisine terms
pub const JAPANESE: &[&str] = &[
    "sushi",
    "sashimi",
    "ramen",
    "udon",
    "tempura",
    "izakaya",
    "món nhật",
    "nhật bản",
];

/// Korean cuisine terms
pub const KOREAN: &[&str] = &[
    "hàn quốc",
    "korean",
    "kimchi",
    "kim chi",
    "bibimbap",
    "tteokbokki",
    "gimbap",
];

/// Chinese cuisine terms
pub const CHINESE: &[&str] = &[
    "dimsum",
    "dim sum",
    "sủi cảo",
    "há cảo",
    "vằn thắn",
    "món hoa",
    "trung hoa",
    "chinese",
];

/// Italian cuisine terms
pub const ITALIAN: &[&str] = &["pizza", "pasta", "spaghetti", "risotto", "italia", "món ý"];

/// Specific Vietnamese dish/staple tokens
///
/// Distinct from the broad [`GENERIC_RESTAURANT`] tokens: these are named
/// dishes that identify a venue as Vietnamese even when no generic food
/// word appears.
pub const VIETNAMESE_DISHES: &[&str] = &[
    "bún chả",
    "bún bò huế",
    "bánh xèo",
    "bánh cuốn",
    "bánh canh",
    "bánh bèo",
    "gỏi cuốn",
    "nem rán",
    "chả cá",
    "cao lầu",
    "mì quảng",
    "cơm tấm",
];

/// Cafe / drink-venue terms (gated tier)
///
/// The explicit description phrases the source also checked - `(cafe)`,
/// `quán cà phê`, `coffee shop` - are subsumed by substring matching on
/// `cafe` / `cà phê` / `coffee`.
pub const CAFE: &[&str] = &[
    "cafe",
    "cà phê",
    "coffee",
    "trà sữa",
    "trà chanh",
    "sinh tố",
    "nước ép",
];

/// Dessert / bakery terms (gated tier)
pub const DESSERT: &[&str] = &[
    "dessert",
    "bakery",
    "bánh ngọt",
    "bánh kem",
    "tráng miệng",
    "tiệm bánh",
    "pudding",
];

/// Description marker for a venue the source tagged as a restaurant
pub const RESTAURANT_MARKER: &str = "(restaurant)";

/// Description marker for a venue the source tagged as a cafe
pub const CAFE_MARKER: &str = "(cafe)";
