//! Keyword and numeric attribute extraction: brand, series, ram, storage,
//! gpu, touch, and display size.
//!
//! All functions expect lower-cased input; misses yield the empty string or
//! `None`, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Vocabulary;
use crate::constants::extract::{STORAGE_KIND_EMMC, STORAGE_KIND_HDD, STORAGE_KIND_SSD};
use crate::extract::cascade::{first_capture, Cascade, CascadeRule};
use crate::types::AttributeValue;
use crate::utils::parse_stripped_number;

static RAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})\s*gb\b").expect("invalid ram pattern"));

static STORAGE: Lazy<Cascade> = Lazy::new(|| {
    Cascade::new(vec![
        // 3-4 digit GB values are storage; 1-2 digit GB values are RAM.
        CascadeRule::new("gigabytes", r"\b(\d{3,4})\s*gb\b", |caps| {
            format!("{}gb", &caps[1])
        }),
        CascadeRule::new("terabytes", r"\b(\d{1,2})\s*tb\b", |caps| {
            format!("{}tb", &caps[1])
        }),
    ])
});

static PARENTHETICAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]*)\)").expect("invalid parenthetical pattern"));

/// First known manufacturer appearing as a whole token, or empty.
pub fn brand(text: &str, vocab: &Vocabulary) -> AttributeValue {
    for candidate in &vocab.brands {
        if has_token(text, candidate) {
            return candidate.clone();
        }
    }
    String::new()
}

/// First known sub-line keyword whose substring appears, scanning the
/// vocabulary in order. List order is a deliberate shadowing rule: an
/// earlier keyword wins even when a later one is more specific.
pub fn series(text: &str, vocab: &Vocabulary) -> AttributeValue {
    for keyword in &vocab.series {
        if text.contains(keyword.as_str()) {
            return keyword.clone();
        }
    }
    String::new()
}

/// RAM size digits in GB (1-2 digit values), or empty.
pub fn ram_size(text: &str) -> AttributeValue {
    RAM_RE
        .captures(text)
        .map(|caps| first_capture(&caps))
        .unwrap_or_default()
}

/// Storage size with its unit suffix retained (`512gb`, `1tb`), or empty.
pub fn storage_size(text: &str) -> AttributeValue {
    STORAGE.apply(text).unwrap_or_default()
}

/// Storage kind driven by presence flags, or empty when no flag appears.
pub fn storage_kind(text: &str) -> AttributeValue {
    if text.contains("ssd") {
        STORAGE_KIND_SSD.to_string()
    } else if text.contains("emmc") {
        STORAGE_KIND_EMMC.to_string()
    } else if text.contains("hdd") || text.contains("hard disk") || text.contains("hard drive") {
        STORAGE_KIND_HDD.to_string()
    } else {
        String::new()
    }
}

/// First known GPU family token appearing as a whole token, or empty.
pub fn gpu(text: &str, vocab: &Vocabulary) -> AttributeValue {
    for candidate in &vocab.gpu_tokens {
        if has_token(text, candidate) {
            return candidate.clone();
        }
    }
    String::new()
}

/// Touchscreen presence flag.
pub fn touch(text: &str) -> bool {
    text.contains("touch")
}

/// Display size in inches from the first parenthetical that parses
/// numerically after unit stripping, e.g. `(15.6 inch)` -> 15.6.
pub fn display_from_parenthetical(text: &str) -> Option<f32> {
    PARENTHETICAL_RE
        .captures_iter(text)
        .find_map(|caps| parse_stripped_number(&caps[1]))
}

fn has_token(text: &str, token: &str) -> bool {
    text.split(|ch: char| !ch.is_ascii_alphanumeric())
        .any(|word| word == token)
}
