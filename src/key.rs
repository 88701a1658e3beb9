//! Deterministic match-key construction.

use crate::constants::key::KEY_SEPARATOR;
use crate::data::NormalizedRecord;
use crate::types::MatchKey;

/// Build the match key: a fixed, ordered subset of normalized fields joined
/// by [`KEY_SEPARATOR`].
///
/// Field values are sanitized by removing any separator character before
/// joining. Normalized values come from closed vocabularies and digit/unit
/// patterns and cannot legitimately contain the separator, so sanitizing
/// keeps the encoding unambiguous without an escape scheme.
///
/// Empty fields are strict literals: an empty field only equals another
/// empty field. Records where several attributes failed to extract on both
/// sides can therefore collapse onto the same near-empty key; that
/// over-merge is an accepted trade-off of exact-key matching.
pub fn build_key(record: &NormalizedRecord) -> MatchKey {
    let fields = [
        record.brand.as_str(),
        record.series.as_str(),
        record.processor.name.as_str(),
        record.processor.gen.as_str(),
        record.processor.variant.as_str(),
        record.ram.size.as_str(),
        record.storage.size.as_str(),
        record.storage.kind.as_str(),
        record.gpu.as_str(),
    ];
    let mut key = String::new();
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            key.push(KEY_SEPARATOR);
        }
        key.extend(field.chars().filter(|ch| *ch != KEY_SEPARATOR));
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::key::KEY_FIELD_COUNT;
    use crate::data::{Processor, Ram, Storage};

    fn sample_record() -> NormalizedRecord {
        NormalizedRecord {
            brand: "hp".into(),
            series: "pavilion".into(),
            processor: Processor {
                name: "i5".into(),
                gen: "11".into(),
                variant: "1135G7".into(),
            },
            ram: Ram { size: "8".into() },
            storage: Storage {
                size: "512gb".into(),
                kind: "ssd".into(),
            },
            gpu: String::new(),
            ..NormalizedRecord::default()
        }
    }

    #[test]
    fn key_joins_the_nine_fields_in_order() {
        let key = build_key(&sample_record());
        assert_eq!(key, "hp|pavilion|i5|11|1135G7|8|512gb|ssd|");
        assert_eq!(key.split('|').count(), KEY_FIELD_COUNT);
    }

    #[test]
    fn key_is_stable_across_calls() {
        let record = sample_record();
        assert_eq!(build_key(&record), build_key(&record));
    }

    #[test]
    fn key_ignores_carried_through_fields() {
        let mut record = sample_record();
        record.price = 999.0;
        record.link = "https://example.test/other".into();
        record.rating = 1.0;
        assert_eq!(build_key(&record), build_key(&sample_record()));
    }

    #[test]
    fn separator_characters_in_fields_are_sanitized() {
        let mut record = sample_record();
        record.series = "pavi|lion".into();
        let key = build_key(&record);
        assert_eq!(key.split('|').count(), KEY_FIELD_COUNT);
        assert!(key.contains("pavilion"));
    }

    #[test]
    fn empty_fields_are_literal_positions() {
        let empty = NormalizedRecord::default();
        assert_eq!(build_key(&empty), "||||||||");
        assert_eq!(build_key(&empty), build_key(&NormalizedRecord::default()));
    }
}
