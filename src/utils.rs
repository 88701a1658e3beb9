//! Text normalization helpers shared by extraction and filtering.

use crate::constants::extract::UNIT_TOKENS;

/// Collapse runs of whitespace into single spaces and trim.
pub fn normalize_inline_whitespace<T: AsRef<str>>(text: T) -> String {
    let mut normalized = String::new();
    let mut seen_space = false;
    for ch in text.as_ref().chars() {
        if ch.is_whitespace() {
            if !seen_space {
                normalized.push(' ');
                seen_space = true;
            }
        } else {
            normalized.push(ch);
            seen_space = false;
        }
    }
    normalized.trim().to_string()
}

/// Lower-case, trim, and collapse whitespace. The canonical form every
/// extractor sees.
pub fn normalize_lower<T: AsRef<str>>(text: T) -> String {
    normalize_inline_whitespace(text.as_ref().to_lowercase())
}

/// Remove punctuation and whitespace entirely, keeping alphanumerics.
/// Used for signature segments, not for match keys.
pub fn squash_alphanumeric(text: &str) -> String {
    text.chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Strip unit tokens (gb/tb/cm/inch/in/″ and straight quotes) so the
/// remainder can be parsed numerically.
pub fn strip_unit_tokens(text: &str) -> String {
    let mut stripped = text.to_lowercase();
    for token in UNIT_TOKENS {
        stripped = stripped.replace(token, " ");
    }
    stripped = stripped.replace('"', " ");
    normalize_inline_whitespace(stripped)
}

/// Lenient float parse over currency-decorated text: keeps digits and the
/// first decimal point, drops grouping separators and symbols. Malformed
/// input yields 0.0.
pub fn parse_price(text: &str) -> f64 {
    let mut digits = String::new();
    let mut seen_dot = false;
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if ch == '.' && !seen_dot {
            digits.push(ch);
            seen_dot = true;
        }
    }
    digits.parse().unwrap_or(0.0)
}

/// Lenient rating parse: first numeric token wins, malformed input yields 0.0.
pub fn parse_rating(text: &str) -> f32 {
    text.split_whitespace()
        .find_map(|token| token.parse::<f32>().ok())
        .unwrap_or(0.0)
}

/// Parse a display-size style value after unit stripping. Returns `None`
/// when no leading numeric token survives.
pub fn parse_stripped_number(text: &str) -> Option<f32> {
    strip_unit_tokens(text)
        .split_whitespace()
        .find_map(|token| token.parse::<f32>().ok())
}
