use crate::pipeline::processing::patterns;

/// Cleans a raw product description down to a display name.
///
/// Removal order matters: the "per ..." trailer goes first so its unit word
/// is not half-eaten by the noise pass, sizes and quantities next, then
/// parentheticals, punctuation, and whitespace.
pub fn clean_product_name(description: &str) -> String {
    let text = patterns::PER_TRAILER.replace_all(description, "");
    let text = patterns::NAME_NOISE.replace_all(&text, "");
    let text = patterns::PARENTHETICAL.replace_all(&text, "");
    let text = patterns::NON_WORD.replace_all(&text, "");
    let text = patterns::MULTI_SPACE.replace_all(&text, " ");
    title_case(text.trim())
}

/// Title-cases text: an alphabetic character is uppercased when the
/// preceding character is not alphabetic, lowercased otherwise.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_alphabetic = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            result.push(ch);
            prev_alphabetic = false;
        }
    }
    result
}
