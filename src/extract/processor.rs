//! Processor family, generation, and variant extraction.
//!
//! Families and generations are ordered cascades; the variant is a single
//! guarded pattern scan. All functions expect lower-cased input and return
//! the empty string on a miss.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::cascade::{first_capture, Cascade, CascadeRule};
use crate::types::AttributeValue;

static FAMILY: Lazy<Cascade> = Lazy::new(|| {
    Cascade::new(vec![
        CascadeRule::new("core_ultra", r"\bcore\s*ultra\s*[579]?\b", |_| {
            "core ultra".to_string()
        }),
        CascadeRule::new("intel_core", r"\bi([3579])\b", |caps| format!("i{}", &caps[1])),
        // Canonical family only; the grade digit is not part of the name.
        CascadeRule::new("ryzen", r"\bryzen\b", |_| "ryzen".to_string()),
        CascadeRule::new("athlon", r"\bathlon\b", |_| "athlon".to_string()),
        CascadeRule::new("apple_m", r"\bm([1-4])\b", |_| "m".to_string()),
        CascadeRule::new("apple_a", r"\ba(\d{1,2})\s+bionic\b", |_| "a".to_string()),
        CascadeRule::new("celeron", r"\bceleron\b", |_| "celeron".to_string()),
        CascadeRule::new("pentium", r"\bpentium(?:\s+(?:gold|silver))?\b", |_| {
            "pentium".to_string()
        }),
        CascadeRule::new("snapdragon", r"\bsnapdragon\b", |_| "snapdragon".to_string()),
        CascadeRule::new("mediatek", r"\b(?:mediatek|dimensity|helio)\b", |_| {
            "mediatek".to_string()
        }),
        CascadeRule::new("exynos", r"\bexynos\b", |_| "exynos".to_string()),
        CascadeRule::new("cortex", r"\bcortex\b", |_| "cortex".to_string()),
    ])
});

static GENERATION: Lazy<Cascade> = Lazy::new(|| {
    Cascade::new(vec![
        CascadeRule::new(
            "explicit_gen",
            r"\b(\d{1,2})\s*(?:st|nd|rd|th)?\s*[- ]?gen(?:eration)?\b",
            first_capture,
        ),
        // Two digits following the grade digit: i5-1135G7 -> 11.
        CascadeRule::new(
            "intel_model",
            r"\bi[3579][\s-]*(\d{2})\d{2,3}[a-z]{0,2}\d?\b",
            first_capture,
        ),
        // Leading digit of the 4-digit suffix: Ryzen 7 5800H -> 5. The
        // grade digit must stand alone so Ryzen 7320U is not split as 7+320.
        CascadeRule::new(
            "ryzen_model",
            r"\bryzen\s*[3579]\b[\s-]*(\d)\d{3}[a-z]{0,2}\b",
            first_capture,
        ),
        CascadeRule::new("apple_m_chip", r"\bm([1-4])\b", first_capture),
        CascadeRule::new("apple_a_chip", r"\ba(\d{1,2})\s+bionic\b", first_capture),
        CascadeRule::new(
            "soc_digits",
            r"\b(?:snapdragon|exynos|dimensity|helio)\s*[a-z]{0,2}\s*(\d{1,4})\b",
            first_capture,
        ),
        CascadeRule::new("cortex_suffix", r"\bcortex[\s-]*a?(\d{1,2})\b", first_capture),
    ])
});

// An i-series model code counts as a variant only when attached to the
// family token (optionally hyphenated): a space-separated "i5 1135G7"
// carries the generation but not a variant, so titles phrased either way
// land on the same key.
static VARIANT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:i[3579]-?|(?:ryzen(?:\s*[3579]\b)?|core\s*ultra(?:\s*[579]\b)?|athlon|celeron|pentium(?:\s+(?:gold|silver))?|snapdragon|mediatek|dimensity|exynos)[\s-]*)(\d{3,5})([a-z]{1,2}\d?)?\b",
    )
    .expect("invalid variant pattern")
});

/// Canonical processor family for the text, or empty.
pub fn family(text: &str) -> AttributeValue {
    FAMILY.apply(text).unwrap_or_default()
}

/// Processor generation digits for the text, or empty. Callers fall back to
/// [`generation_from_variant`] when this cascade misses.
pub fn generation(text: &str) -> AttributeValue {
    GENERATION.apply(text).unwrap_or_default()
}

/// Trailing model code following a family token, upper-cased, or empty.
/// Unit-suffixed numbers (`512gb`) are not model codes and are skipped.
pub fn variant(text: &str) -> String {
    for caps in VARIANT.captures_iter(text) {
        let digits = &caps[1];
        let suffix = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        if suffix == "gb" || suffix == "tb" {
            continue;
        }
        return format!("{digits}{suffix}").to_uppercase();
    }
    String::new()
}

/// Secondary generation fallback from an already-extracted variant: keep the
/// leading digits of the variant's digit run, leaving a 2-3 digit tail
/// (`7320U` -> `7`, `155H` -> `1`, `11350H` -> `11`).
pub fn generation_from_variant(variant: &str) -> AttributeValue {
    let digits: String = variant
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return String::new();
    }
    let keep = digits.len().saturating_sub(3).max(1);
    digits[..keep].to_string()
}

/// Family cascade rule names in priority order, for auditing.
pub fn family_rule_names() -> Vec<&'static str> {
    FAMILY.rule_names()
}

/// Generation cascade rule names in priority order, for auditing.
pub fn generation_rule_names() -> Vec<&'static str> {
    GENERATION.rule_names()
}
