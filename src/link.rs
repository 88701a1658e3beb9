//! Bucketed cross-source linking.
//!
//! Source-B normalized records are partitioned into buckets keyed by their
//! match key; source-A records are then scanned in order and joined against
//! the buckets. Output ordering follows source-A iteration order with ties
//! broken by source-B bucket insertion order.

use indexmap::IndexMap;
use tracing::debug;

use crate::config::Vocabulary;
use crate::data::{LinkOutput, MatchedEntry, NormalizedRecord, RawRecord, SiteOffer};
use crate::extract::normalize_record;
use crate::key::build_key;
use crate::types::{MatchKey, SourceName};

/// Link two already-normalized sources.
///
/// A source-A record whose key bucket is non-empty emits one matched entry
/// per bucket member (the cross product: one A listing can legitimately
/// pair with several B listings sharing its key) and marks each of them
/// consumed. An empty bucket emits an A-only entry. B records never
/// consumed by any match become B-only entries, in B iteration order.
pub fn link_normalized(
    a_name: &str,
    a_records: &[NormalizedRecord],
    b_name: &str,
    b_records: &[NormalizedRecord],
) -> LinkOutput {
    let mut buckets: IndexMap<MatchKey, Vec<usize>> = IndexMap::new();
    for (idx, record) in b_records.iter().enumerate() {
        buckets.entry(build_key(record)).or_default().push(idx);
    }

    let mut consumed = vec![false; b_records.len()];
    let mut output = LinkOutput::default();

    for record in a_records {
        let key = build_key(record);
        match buckets.get(&key) {
            Some(bucket) if !bucket.is_empty() => {
                for &b_idx in bucket {
                    output
                        .matched
                        .push(matched_pair(record, a_name, &b_records[b_idx], b_name));
                    consumed[b_idx] = true;
                }
            }
            _ => output.a_only.push(single_source(record, a_name)),
        }
    }

    for (idx, record) in b_records.iter().enumerate() {
        if !consumed[idx] {
            output.b_only.push(single_source(record, b_name));
        }
    }

    debug!(
        matched = output.matched.len(),
        a_only = output.a_only.len(),
        b_only = output.b_only.len(),
        buckets = buckets.len(),
        "link pass complete"
    );
    output
}

/// Full pipeline entry: normalize both raw collections, then link.
///
/// The two normalization passes share no mutable state and run in parallel;
/// linking starts once both complete.
pub fn link_records(
    a_name: &str,
    raw_a: &[RawRecord],
    b_name: &str,
    raw_b: &[RawRecord],
    vocab: &Vocabulary,
) -> LinkOutput {
    let (a_records, b_records) = rayon::join(
        || normalize_all(raw_a, vocab),
        || normalize_all(raw_b, vocab),
    );
    link_normalized(a_name, &a_records, b_name, &b_records)
}

/// Normalize a raw collection, preserving input order.
pub fn normalize_all(raw: &[RawRecord], vocab: &Vocabulary) -> Vec<NormalizedRecord> {
    raw.iter().map(|record| normalize_record(record, vocab)).collect()
}

fn offer(record: &NormalizedRecord, source: &str) -> SiteOffer {
    SiteOffer {
        source: SourceName::from(source),
        price: record.price,
        link: record.link.clone(),
        rating: record.rating,
    }
}

fn matched_pair(
    a_record: &NormalizedRecord,
    a_name: &str,
    b_record: &NormalizedRecord,
    b_name: &str,
) -> MatchedEntry {
    MatchedEntry {
        brand: a_record.brand.clone(),
        series: a_record.series.clone(),
        specs: a_record.specs(),
        sites: vec![offer(a_record, a_name), offer(b_record, b_name)],
    }
}

fn single_source(record: &NormalizedRecord, source: &str) -> MatchedEntry {
    MatchedEntry {
        brand: record.brand.clone(),
        series: record.series.clone(),
        specs: record.specs(),
        sites: vec![offer(record, source)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Processor, Ram, Storage};

    fn record(brand: &str, variant: &str, link: &str) -> NormalizedRecord {
        NormalizedRecord {
            brand: brand.into(),
            series: "pavilion".into(),
            processor: Processor {
                name: "i5".into(),
                gen: "11".into(),
                variant: variant.into(),
            },
            ram: Ram { size: "8".into() },
            storage: Storage {
                size: "512gb".into(),
                kind: "ssd".into(),
            },
            link: link.into(),
            ..NormalizedRecord::default()
        }
    }

    #[test]
    fn matching_keys_produce_a_two_site_entry() {
        let a = vec![record("hp", "1135G7", "a/1")];
        let b = vec![record("hp", "1135G7", "b/1")];
        let output = link_normalized("amazon", &a, "flipkart", &b);
        assert_eq!(output.matched.len(), 1);
        assert!(output.a_only.is_empty());
        assert!(output.b_only.is_empty());
        let sites = &output.matched[0].sites;
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].source, "amazon");
        assert_eq!(sites[1].source, "flipkart");
    }

    #[test]
    fn bucket_fanout_emits_one_entry_per_member() {
        let a = vec![record("hp", "1135G7", "a/1")];
        let b = vec![
            record("hp", "1135G7", "b/1"),
            record("hp", "1135G7", "b/2"),
            record("hp", "1135G7", "b/3"),
        ];
        let output = link_normalized("amazon", &a, "flipkart", &b);
        assert_eq!(output.matched.len(), 3);
        assert!(output.b_only.is_empty());
        let b_links: Vec<&str> = output
            .matched
            .iter()
            .map(|entry| entry.sites[1].link.as_str())
            .collect();
        // Tie order follows bucket insertion order.
        assert_eq!(b_links, vec!["b/1", "b/2", "b/3"]);
    }

    #[test]
    fn unmatched_records_split_into_only_sets() {
        let a = vec![record("hp", "1135G7", "a/1"), record("dell", "1165G7", "a/2")];
        let b = vec![record("hp", "1135G7", "b/1"), record("acer", "1115G4", "b/2")];
        let output = link_normalized("amazon", &a, "flipkart", &b);
        assert_eq!(output.matched.len(), 1);
        assert_eq!(output.a_only.len(), 1);
        assert_eq!(output.a_only[0].sites[0].link, "a/2");
        assert_eq!(output.b_only.len(), 1);
        assert_eq!(output.b_only[0].sites[0].link, "b/2");
    }

    #[test]
    fn single_attribute_disagreement_is_a_false_negative() {
        // Same physical unit, generation extracted differently on each side:
        // exact-key matching accepts this miss by design.
        let a = vec![record("hp", "1135G7", "a/1")];
        let mut b_record = record("hp", "1135G7", "b/1");
        b_record.processor.gen = "1".into();
        let output = link_normalized("amazon", &a, "flipkart", &[b_record]);
        assert!(output.matched.is_empty());
        assert_eq!(output.a_only.len(), 1);
        assert_eq!(output.b_only.len(), 1);
    }

    #[test]
    fn combined_concatenates_in_output_order() {
        let a = vec![record("hp", "1135G7", "a/1"), record("dell", "1165G7", "a/2")];
        let b = vec![record("hp", "1135G7", "b/1"), record("acer", "1115G4", "b/2")];
        let output = link_normalized("amazon", &a, "flipkart", &b);
        let combined = output.combined();
        assert_eq!(combined.len(), 3);
        assert_eq!(combined[0], output.matched[0]);
        assert_eq!(combined[1], output.a_only[0]);
        assert_eq!(combined[2], output.b_only[0]);
    }
}
