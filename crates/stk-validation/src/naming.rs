//! Naming conventions

use once_cell::sync::Lazy;
use regex::Regex;

static PASCAL_CASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").expect("static pattern compiles"));

/// `^[A-Z][a-zA-Z0-9]*$`
#[inline]
#[must_use]
pub fn is_pascal_case(name: &str) -> bool {
    PASCAL_CASE.is_match(name)
}

/// Convert to PascalCase, or `None` if no ASCII letter survives
///
/// Splits on every non-alphanumeric ASCII character, capitalises each word,
/// then drops leading digits. Already-PascalCase input is returned unchanged.
#[must_use]
pub fn to_pascal_case(name: &str) -> Option<String> {
    let joined: String = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect();

    let trimmed = joined.trim_start_matches(|c: char| c.is_ascii_digit());
    if trimmed.is_empty() {
        return None;
    }
    let fixed = capitalize(trimmed);
    debug_assert!(is_pascal_case(&fixed));
    Some(fixed)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
