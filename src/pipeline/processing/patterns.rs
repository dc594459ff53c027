use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

// Pattern sources for data extraction. Kept as plain strings so the
// combined cleanup pattern can be assembled from the same expressions.
pub const PER_UNIT_EXPR: &str = r"per\s+(?P<unit>kilogram|kg|gram|g|litre|l|ml|millilitre)s?\b";
pub const PACKAGE_SIZE_EXPR: &str =
    r"\b(?P<value>\d+(\.\d+)?)\s*(?P<unit>kg|kilogram(s)?|g|gram(s)?|l|litre(s)?|ml|millilitre(s)?)\b";
pub const QUANTITY_EXPR: &str = r"\b\d+\s*(dozen|bags?|packs?|items?)\b";
pub const UNIT_NOISE_EXPR: &str =
    r"\b(kilo)?gram(s)?\b|\b(litre|litres|liter|liters)\b|\bunit\b";

fn compile(expr: &str) -> Regex {
    RegexBuilder::new(expr)
        .case_insensitive(true)
        .build()
        .expect("built-in pattern failed to compile")
}

/// "per kilogram", "per 100 g" style phrasing: the price is already quoted
/// per unit of measure.
pub static PER_UNIT: Lazy<Regex> = Lazy::new(|| compile(PER_UNIT_EXPR));

/// Package sizes such as "500 grams" or "1.5 l"; captures value and unit.
pub static PACKAGE_SIZE: Lazy<Regex> = Lazy::new(|| compile(PACKAGE_SIZE_EXPR));

/// Count quantities such as "4 bags" or "1 dozen".
pub static QUANTITY: Lazy<Regex> = Lazy::new(|| compile(QUANTITY_EXPR));

/// Bare unit nouns with no preceding number, left over after size removal.
pub static UNIT_NOISE: Lazy<Regex> = Lazy::new(|| compile(UNIT_NOISE_EXPR));

/// Combined removal pass used by name cleaning. Alternation order matters:
/// package sizes are consumed before bare unit nouns so that "500 grams"
/// disappears as a whole.
pub static NAME_NOISE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        "({})|({})|({})",
        PACKAGE_SIZE_EXPR, QUANTITY_EXPR, UNIT_NOISE_EXPR
    ))
});

/// Everything from a standalone "per" to the end of the description.
pub static PER_TRAILER: Lazy<Regex> = Lazy::new(|| compile(r",?\s*per\b.*$"));

/// Parenthetical segments, contents included.
pub static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| compile(r"\(.*?\)"));

/// Anything that is not a word character or whitespace.
pub static NON_WORD: Lazy<Regex> = Lazy::new(|| compile(r"[^\w\s]"));

/// Runs of two or more whitespace characters.
pub static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| compile(r"\s{2,}"));

/// Bare year-month date shape (YYYY-MM).
pub static YEAR_MONTH: Lazy<Regex> = Lazy::new(|| compile(r"^\d{4}-\d{2}$"));
