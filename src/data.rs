use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use crate::types::{AttributeValue, DetailKey, SourceName};

/// Unprocessed per-listing data from one source, as received.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawRecord {
    /// Free-text listing title.
    pub title: String,
    /// Semi-structured detail fields; key conventions vary per source.
    /// Insertion order is preserved.
    #[serde(default)]
    pub details: IndexMap<DetailKey, String>,
    /// Currency-decorated price text.
    #[serde(default)]
    pub price: String,
    /// Listing URL.
    #[serde(default)]
    pub link: String,
    /// Free-text or numeric rating.
    #[serde(default)]
    pub rating: String,
}

/// Processor attributes split into family, generation, and model code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Processor {
    /// Canonical family, e.g. `i5`, `ryzen`, `m`, `snapdragon`.
    pub name: AttributeValue,
    /// Generation digits, e.g. `11`, `5`.
    pub gen: AttributeValue,
    /// Trailing model code, upper-cased, e.g. `1135G7`, `5500U`.
    pub variant: String,
}

/// Memory attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ram {
    /// Size digits in GB, e.g. `16`.
    pub size: AttributeValue,
}

/// Storage attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storage {
    /// Size with unit suffix retained, e.g. `512gb`, `1tb`.
    pub size: AttributeValue,
    /// Reported kind when a flag is present: `ssd`, `emmc`, `hdd`, or empty.
    pub kind: AttributeValue,
}

/// Structured attribute view derived deterministically from a raw record.
///
/// All text fields are lower-cased and trimmed; extraction misses are the
/// empty string. Construction never fails.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub brand: AttributeValue,
    pub series: AttributeValue,
    pub processor: Processor,
    pub ram: Ram,
    pub storage: Storage,
    /// Touchscreen presence flag.
    pub touch: bool,
    /// Display size in inches when one could be parsed.
    pub display_inch: Option<f32>,
    pub gpu: AttributeValue,
    /// Carried-through numeric price (0.0 when malformed).
    pub price: f64,
    /// Carried-through listing URL.
    pub link: String,
    /// Carried-through numeric rating (0.0 when malformed).
    pub rating: f32,
}

impl NormalizedRecord {
    /// Attribute view with the carried-through price/link/rating stripped.
    pub fn specs(&self) -> Specs {
        Specs {
            brand: self.brand.clone(),
            series: self.series.clone(),
            processor: self.processor.clone(),
            ram: self.ram.clone(),
            storage: self.storage.clone(),
            touch: self.touch,
            display_inch: self.display_inch,
            gpu: self.gpu.clone(),
        }
    }
}

/// A `NormalizedRecord` with price/link/rating stripped, as embedded in
/// matched output entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Specs {
    pub brand: AttributeValue,
    pub series: AttributeValue,
    pub processor: Processor,
    pub ram: Ram,
    pub storage: Storage,
    pub touch: bool,
    pub display_inch: Option<f32>,
    pub gpu: AttributeValue,
}

/// One contributing listing's offer data within a matched entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteOffer {
    pub source: SourceName,
    pub price: f64,
    pub link: String,
    pub rating: f32,
}

/// A linkage output row: shared specs plus one offer per contributing
/// raw record (two for cross-source matches, one for single-source rows).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchedEntry {
    pub brand: AttributeValue,
    pub series: AttributeValue,
    pub specs: Specs,
    pub sites: Vec<SiteOffer>,
}

/// Result of one linking run over two sources.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LinkOutput {
    /// Cross-source matches, in source-A iteration order with ties broken
    /// by source-B bucket insertion order.
    pub matched: Vec<MatchedEntry>,
    /// Source-A records whose key bucket was empty, in A iteration order.
    pub a_only: Vec<MatchedEntry>,
    /// Source-B records never consumed by a match, in B iteration order.
    pub b_only: Vec<MatchedEntry>,
}

impl LinkOutput {
    /// Concatenation of matched, A-only, and B-only entries, in that order.
    pub fn combined(&self) -> Vec<MatchedEntry> {
        let mut all =
            Vec::with_capacity(self.matched.len() + self.a_only.len() + self.b_only.len());
        all.extend(self.matched.iter().cloned());
        all.extend(self.a_only.iter().cloned());
        all.extend(self.b_only.iter().cloned());
        all
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty() && self.a_only.is_empty() && self.b_only.is_empty()
    }
}
