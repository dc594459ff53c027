use once_cell::sync::Lazy;
use regex::Regex;

pub const OTHER_CATEGORY: &str = "other";

// Category keywords for classification.
// Order matters: more specific categories and keywords come first, and the
// first match is authoritative.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "vegetable",
        &[
            "potato", "sweet potato", "tomato", "carrot", "onion",
            "celery", "cucumber", "iceberg lettuce", "romaine lettuce",
            "broccoli", "bell pepper", "lemon", "lime", "avocado",
            "cabbage", "mushroom", "squash", "green salad",
        ],
    ),
    (
        "fruit",
        &[
            "cantaloupe", "apple", "orange", "banana", "pear",
            "grape", "strawberry",
        ],
    ),
    (
        "dairy_and_egg",
        &[
            "cow milk", "soy milk", "nut milk", "whole cream", "butter",
            "block cheese", "yogurt", "egg",
        ],
    ),
    ("pork", &["pork loin", "pork", "bacon"]),
    (
        "beef",
        &[
            "beef stewing", "beef striploin", "beef top sirloin",
            "beef rib", "ground beef", "beef",
        ],
    ),
    (
        "poultry",
        &[
            "whole chicken", "chicken breast", "chicken thigh",
            "chicken drumsticks", "chicken",
        ],
    ),
    ("plant_based_protein", &["tofu"]),
    (
        "carbs",
        &[
            "dry pasta", "fresh pasta", "pasta", "brown rice", "white rice",
            "white bread", "flatbread", "pita", "crackers", "crisp bread",
        ],
    ),
    ("seafood", &["salmon", "shrimp", "tuna"]),
    (
        "nuts_and_dry_beans",
        &[
            "peanut", "almond", "sunflower seed", "dried lentils",
            "dry bean", "legume", "bean",
        ],
    ),
    (
        "seasoning",
        &["ketchup", "mayonnaise", "salad dressing", "white sugar", "brown sugar"],
    ),
    ("baby_items", &["baby food", "infant formula"]),
    (
        "frozen_food",
        &[
            "frozen french fries", "frozen broccoli", "frozen green bean",
            "frozen corn", "frozen mixed vegetable", "frozen pea",
            "frozen pizza", "frozen spinach", "frozen strawberry",
        ],
    ),
    ("deli", &["wiener", "meatless burger", "hummus", "salsa"]),
    (
        "canned_food",
        &[
            "canned tomato", "canned baked bean", "canned soup",
            "canned bean", "canned lentil", "canned corn",
            "canned peach", "canned pear", "canned salmon", "canned tuna",
        ],
    ),
    ("snacks", &["cookie", "cookies", "sweet biscuit", "biscuit"]),
    ("baking_ingredients", &["wheat flour", "wheet flour", "flour"]),
    (
        "personal_care",
        &["deodorant", "toothpaste", "tooth paste", "shampoo", "conditioner"],
    ),
    ("household_supply", &["laundry detergent"]),
    (
        "drink",
        &["apple juice", "roasted coffee", "ground coffee", "coffee", "tea"],
    ),
    ("pantry_item", &["peanut butter", "pasta sauce", "cereal"]),
    ("oil", &["margarine", "vegetable oil", "canola oil", "olive oil"]),
];

// Keyword matching is whole-word with a tolerated trailing plural suffix,
// so "Potatoes" still hits "potato" without allowing substring matches
// inside larger words.
static KEYWORD_PATTERNS: Lazy<Vec<(&'static str, Vec<(&'static str, Regex)>)>> =
    Lazy::new(|| {
        CATEGORY_KEYWORDS
            .iter()
            .map(|(category, keywords)| {
                let compiled = keywords
                    .iter()
                    .map(|keyword| {
                        let pattern = format!(r"\b{}(?:e?s)?\b", regex::escape(keyword));
                        (
                            *keyword,
                            Regex::new(&pattern).expect("keyword pattern failed to compile"),
                        )
                    })
                    .collect();
                (*category, compiled)
            })
            .collect()
    });

/// Infers the product category from a cleaned product name. The first
/// matching category in declaration order wins; unmatched names fall back
/// to `other`.
pub fn classify(name: &str) -> &'static str {
    match matched_keyword(name) {
        Some((category, _)) => category,
        None => OTHER_CATEGORY,
    }
}

/// The winning (category, keyword) pair, if any. Useful for tracing why a
/// product landed where it did.
pub fn matched_keyword(name: &str) -> Option<(&'static str, &'static str)> {
    let name_lower = name.to_lowercase();
    for (category, keywords) in KEYWORD_PATTERNS.iter() {
        for (keyword, pattern) in keywords {
            if pattern.is_match(&name_lower) {
                return Some((*category, *keyword));
            }
        }
    }
    None
}
