//! Attribute extraction: raw listings to normalized records.
//!
//! Extraction is a pure function of the raw record. For every attribute the
//! value parsed from a structured detail field wins over the value parsed
//! from the free-text title; the title is the fallback when the detail field
//! is missing or fails to parse. Misses yield empty attributes, never
//! errors.

pub mod cascade;
pub mod fields;
pub mod processor;

use tracing::warn;

use crate::config::Vocabulary;
use crate::data::{NormalizedRecord, Processor, Ram, RawRecord, Storage};
use crate::types::{AttributeValue, DetailKey};
use crate::utils::{normalize_lower, parse_price, parse_rating, parse_stripped_number};

/// Derive a normalized record from a raw listing. Never fails; a record
/// missing even a title yields a best-effort record with empty attributes.
pub fn normalize_record(raw: &RawRecord, vocab: &Vocabulary) -> NormalizedRecord {
    let title = normalize_lower(&raw.title);
    if title.is_empty() {
        warn!(link = %raw.link, "raw record has an empty title; extracting from details only");
    }

    let details: Vec<(DetailKey, String)> = raw
        .details
        .iter()
        .map(|(key, value)| (normalize_lower(key), normalize_lower(value)))
        .collect();
    let detail = |aliases: &[DetailKey]| -> Option<String> {
        aliases.iter().find_map(|alias| {
            details
                .iter()
                .find(|(key, _)| key == alias)
                .map(|(_, value)| value.clone())
        })
    };
    let aliases = &vocab.detail_aliases;

    let brand = prefer(
        detail(&aliases.brand).map(|text| fields::brand(&text, vocab)),
        || fields::brand(&title, vocab),
    );
    let series = prefer(
        detail(&aliases.series).map(|text| fields::series(&text, vocab)),
        || fields::series(&title, vocab),
    );

    let processor_text = detail(&aliases.processor);
    let name = prefer(
        processor_text.as_deref().map(processor::family),
        || processor::family(&title),
    );
    let variant = prefer(
        processor_text.as_deref().map(processor::variant),
        || processor::variant(&title),
    );
    let mut gen = prefer(
        processor_text.as_deref().map(processor::generation),
        || processor::generation(&title),
    );
    if gen.is_empty() {
        gen = processor::generation_from_variant(&variant);
    }

    let ram_text = detail(&aliases.ram);
    let ram_size = prefer(ram_text.as_deref().map(fields::ram_size), || {
        fields::ram_size(&title)
    });

    let storage_text = detail(&aliases.storage);
    let storage_size = prefer(storage_text.as_deref().map(fields::storage_size), || {
        fields::storage_size(&title)
    });
    let storage_kind = prefer(storage_text.as_deref().map(fields::storage_kind), || {
        fields::storage_kind(&title)
    });

    let gpu = prefer(
        detail(&aliases.gpu).map(|text| fields::gpu(&text, vocab)),
        || fields::gpu(&title, vocab),
    );

    let touch = detail(&aliases.touch)
        .map(|value| is_affirmative(&value))
        .unwrap_or_else(|| fields::touch(&title));

    let display_inch = detail(&aliases.display)
        .and_then(|text| parse_stripped_number(&text))
        .or_else(|| fields::display_from_parenthetical(&title));

    NormalizedRecord {
        brand,
        series,
        processor: Processor { name, gen, variant },
        ram: Ram { size: ram_size },
        storage: Storage {
            size: storage_size,
            kind: storage_kind,
        },
        touch,
        display_inch,
        gpu,
        price: parse_price(&raw.price),
        link: raw.link.trim().to_string(),
        rating: parse_rating(&raw.rating),
    }
}

/// Detail-over-title precedence: the detail-derived value wins unless it is
/// missing or extracted to empty, in which case the title fallback runs.
fn prefer(detail_value: Option<AttributeValue>, title_fallback: impl FnOnce() -> AttributeValue) -> AttributeValue {
    match detail_value {
        Some(value) if !value.is_empty() => value,
        _ => title_fallback(),
    }
}

fn is_affirmative(value: &str) -> bool {
    matches!(value, "yes" | "y" | "true" | "1") || value.contains("touch")
}
