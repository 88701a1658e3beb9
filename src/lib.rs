#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Externalized market vocabulary and filter thresholds.
pub mod config;
/// Centralized constants used across key building, filtering, and extraction.
pub mod constants;
/// Raw and normalized record types and linkage outputs.
pub mod data;
/// Attribute extraction cascades and the normalization entry point.
pub mod extract;
/// Near-duplicate filtering for ranked candidate sequences.
pub mod filter;
/// Deterministic match-key construction.
pub mod key;
/// Bucketed cross-source linking.
pub mod link;
/// Linkage run statistics.
pub mod metrics;
/// Shared type aliases.
pub mod types;
/// Text normalization helpers.
pub mod utils;

mod errors;

pub use config::{DetailAliases, FilterConfig, Vocabulary};
pub use data::{
    LinkOutput, MatchedEntry, NormalizedRecord, Processor, Ram, RawRecord, SiteOffer, Specs,
    Storage,
};
pub use errors::LinkError;
pub use extract::normalize_record;
pub use filter::{build_signature, dedupe_ranked, overfetch_count, CandidateView};
pub use key::build_key;
pub use link::{link_normalized, link_records, normalize_all};
pub use metrics::{link_stats, LinkStats};
pub use types::{
    AttributeValue, DetailKey, MatchKey, ModelWord, Signature, SourceName,
};
