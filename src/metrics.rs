use std::collections::HashMap;

use crate::data::LinkOutput;

/// Aggregate statistics for one linking run.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkStats {
    /// Matched entries emitted (cross-product pairs, not distinct units).
    pub matched_pairs: usize,
    /// Source-A records with an empty bucket.
    pub a_only: usize,
    /// Source-B records never consumed by a match.
    pub b_only: usize,
    /// Distinct source-A records that contributed at least one match.
    pub a_matched: usize,
    /// Share of source-A records that matched.
    pub a_match_rate: f64,
    /// Largest number of matched entries emitted for a single source-A
    /// record. Outsized fan-out usually signals near-empty keys collapsing
    /// distinct units together.
    pub max_fanout: usize,
}

/// Compute linking statistics from an output. `None` for an empty run.
pub fn link_stats(output: &LinkOutput) -> Option<LinkStats> {
    if output.is_empty() {
        return None;
    }
    let mut fanout_by_a_link: HashMap<&str, usize> = HashMap::new();
    for entry in &output.matched {
        let a_link = entry
            .sites
            .first()
            .map(|site| site.link.as_str())
            .unwrap_or_default();
        *fanout_by_a_link.entry(a_link).or_insert(0) += 1;
    }
    let a_matched = fanout_by_a_link.len();
    let a_total = a_matched + output.a_only.len();
    let a_match_rate = if a_total == 0 {
        0.0
    } else {
        a_matched as f64 / a_total as f64
    };
    let max_fanout = fanout_by_a_link.values().copied().max().unwrap_or(0);
    Some(LinkStats {
        matched_pairs: output.matched.len(),
        a_only: output.a_only.len(),
        b_only: output.b_only.len(),
        a_matched,
        a_match_rate,
        max_fanout,
    })
}
