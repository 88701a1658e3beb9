//! Serving-time near-duplicate suppression over ranked candidates.
//!
//! Candidates are walked in rank order. A candidate is rejected when its
//! fuzzy signature is too similar to any signature already accepted in this
//! invocation, or when its significant model words overlap too heavily with
//! an already-accepted same-brand model. Accepted candidates keep their
//! relative order; the walk stops at the requested count. All scratch state
//! is scoped to one invocation.

use std::collections::HashSet;

use strsim::normalized_levenshtein;
use tracing::debug;

use crate::config::FilterConfig;
use crate::constants::filter::SIGNATURE_SEPARATOR;
use crate::data::{MatchedEntry, NormalizedRecord, Specs};
use crate::types::{AttributeValue, ModelWord, Signature};
use crate::utils::squash_alphanumeric;

/// The attribute view the filter needs from a candidate. Implemented for
/// the crate's own record types; external store rows can implement it to
/// pass through the filter unchanged.
pub trait CandidateView {
    /// Normalized brand used to scope the model-word check.
    fn brand(&self) -> AttributeValue;
    /// Model text whose significant words feed the overlap check.
    fn model(&self) -> String;
    /// Fuzzy comparison signature, distinct from the match key.
    fn signature(&self) -> Signature;
}

/// Build a signature from spec-level attributes: brand/model/processor/ram/
/// storage/gpu/display segments, each punctuation-stripped and
/// whitespace-collapsed, joined by a separator.
pub fn build_signature(specs: &Specs) -> Signature {
    let ram = if specs.ram.size.is_empty() {
        String::new()
    } else {
        format!("{}gb", specs.ram.size)
    };
    let display = specs
        .display_inch
        .map(|inch| inch.to_string())
        .unwrap_or_default();
    let segments = [
        specs.brand.as_str(),
        specs.series.as_str(),
        specs.processor.name.as_str(),
        ram.as_str(),
        specs.storage.size.as_str(),
        specs.gpu.as_str(),
        display.as_str(),
    ];
    let mut signature = String::new();
    for (idx, segment) in segments.iter().enumerate() {
        if idx > 0 {
            signature.push(SIGNATURE_SEPARATOR);
        }
        signature.push_str(&squash_alphanumeric(segment));
    }
    signature
}

impl CandidateView for Specs {
    fn brand(&self) -> AttributeValue {
        self.brand.clone()
    }

    fn model(&self) -> String {
        format!("{} {}", self.series, self.processor.variant)
    }

    fn signature(&self) -> Signature {
        build_signature(self)
    }
}

impl CandidateView for NormalizedRecord {
    fn brand(&self) -> AttributeValue {
        self.brand.clone()
    }

    fn model(&self) -> String {
        format!("{} {}", self.series, self.processor.variant)
    }

    fn signature(&self) -> Signature {
        build_signature(&self.specs())
    }
}

impl CandidateView for MatchedEntry {
    fn brand(&self) -> AttributeValue {
        self.specs.brand()
    }

    fn model(&self) -> String {
        self.specs.model()
    }

    fn signature(&self) -> Signature {
        build_signature(&self.specs)
    }
}

struct Accepted {
    signature: Signature,
    brand: AttributeValue,
    model_words: HashSet<ModelWord>,
}

/// Filter a rank-ordered candidate sequence down to at most `requested`
/// survivors, preserving relative order. Each invocation owns its accepted
/// set; concurrent invocations never share state.
pub fn dedupe_ranked<T: CandidateView>(
    candidates: Vec<T>,
    requested: usize,
    config: &FilterConfig,
) -> Vec<T> {
    let mut accepted: Vec<Accepted> = Vec::new();
    let mut kept: Vec<T> = Vec::new();
    let mut rejected = 0usize;

    for candidate in candidates {
        if kept.len() >= requested {
            break;
        }
        let signature = candidate.signature();
        let too_similar = accepted.iter().any(|prior| {
            normalized_levenshtein(&signature, &prior.signature) > config.similarity_threshold
        });
        if too_similar {
            rejected += 1;
            continue;
        }

        let brand = candidate.brand();
        let model_words = significant_words(&candidate.model(), config);
        let model_overlaps = !brand.is_empty()
            && !model_words.is_empty()
            && accepted
                .iter()
                .filter(|prior| prior.brand == brand)
                .any(|prior| {
                    word_overlap(&model_words, &prior.model_words)
                        >= config.model_overlap_threshold
                });
        if model_overlaps {
            rejected += 1;
            continue;
        }

        accepted.push(Accepted {
            signature,
            brand,
            model_words,
        });
        kept.push(candidate);
    }

    debug!(kept = kept.len(), rejected, requested, "near-duplicate filter pass");
    kept
}

/// Candidates a caller should fetch to fill `requested` results after
/// rejections.
pub fn overfetch_count(requested: usize, config: &FilterConfig) -> usize {
    requested.saturating_mul(config.overfetch_multiplier)
}

/// Model words long enough to be significant, lower-cased.
fn significant_words(model: &str, config: &FilterConfig) -> HashSet<ModelWord> {
    model
        .to_lowercase()
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|word| word.len() > config.insignificant_word_max_chars)
        .map(str::to_string)
        .collect()
}

/// Fraction of the candidate's significant words present in the prior set.
fn word_overlap(candidate: &HashSet<ModelWord>, prior: &HashSet<ModelWord>) -> f64 {
    if candidate.is_empty() {
        return 0.0;
    }
    let shared = candidate.intersection(prior).count();
    shared as f64 / candidate.len() as f64
}
