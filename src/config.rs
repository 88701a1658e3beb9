use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::filter;
use crate::errors::LinkError;
use crate::types::DetailKey;

/// Per-attribute detail-field aliases, lower-cased.
///
/// Sources name the same structured field differently (`RAM` vs `Memory`);
/// the extractor scans these alias lists in order and uses the first detail
/// key present on a record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetailAliases {
    /// Aliases for the manufacturer field.
    pub brand: Vec<DetailKey>,
    /// Aliases for the series / model-line field.
    pub series: Vec<DetailKey>,
    /// Aliases for the processor description field.
    pub processor: Vec<DetailKey>,
    /// Aliases for the memory field.
    pub ram: Vec<DetailKey>,
    /// Aliases for the storage field.
    pub storage: Vec<DetailKey>,
    /// Aliases for the graphics field.
    pub gpu: Vec<DetailKey>,
    /// Aliases for the display-size field.
    pub display: Vec<DetailKey>,
    /// Aliases for the touchscreen field.
    pub touch: Vec<DetailKey>,
}

impl Default for DetailAliases {
    fn default() -> Self {
        Self {
            brand: str_list(&["brand", "manufacturer", "brand name"]),
            series: str_list(&["series", "model name", "model", "product line"]),
            processor: str_list(&[
                "processor",
                "processor name",
                "cpu",
                "cpu model",
                "chipset",
                "processor type",
            ]),
            ram: str_list(&["ram", "memory", "ram memory", "system memory", "installed ram"]),
            storage: str_list(&["storage", "ssd capacity", "hard drive size", "hard disk", "disk"]),
            gpu: str_list(&["graphics", "gpu", "graphic processor", "video card", "graphics card"]),
            display: str_list(&["display", "screen size", "display size", "standing screen display size"]),
            touch: str_list(&["touchscreen", "touch screen", "touch"]),
        }
    }
}

/// Market vocabulary driving the keyword-based extraction cascades.
///
/// All lists are ordered and order is semantic for `series`: the scan
/// returns the first keyword whose substring appears, so an earlier generic
/// keyword deliberately shadows a later, more specific one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Known manufacturer names (closed set, whole-token match).
    pub brands: Vec<String>,
    /// Known sub-line keywords, scanned in order, first substring match wins.
    pub series: Vec<String>,
    /// Known GPU family tokens (closed set, whole-token match).
    pub gpu_tokens: Vec<String>,
    /// Detail-field alias lists per attribute.
    #[serde(default)]
    pub detail_aliases: DetailAliases,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            brands: str_list(&[
                "lenovo", "hp", "dell", "asus", "acer", "apple", "msi", "samsung", "lg",
                "microsoft", "infinix", "honor", "huawei", "xiaomi", "realme", "avita",
                "gigabyte", "razer", "vaio", "chuwi",
            ]),
            // Order is a shadowing rule: "legion" before "legion slim" makes the
            // generic line win; "macbook air" before "macbook" makes the
            // specific line win. Both directions are used deliberately.
            series: str_list(&[
                "macbook air", "macbook pro", "macbook", "thinkbook", "thinkpad", "ideapad",
                "legion", "legion slim", "loq", "yoga", "vivobook", "zenbook", "rog strix",
                "rog", "tuf", "pavilion", "pavilion x360", "victus", "omen", "envy", "spectre",
                "elitebook", "probook", "chromebook", "inspiron", "latitude", "vostro", "xps",
                "alienware", "aspire", "nitro", "predator", "swift", "extensa", "galaxy book",
                "gram", "surface", "katana", "sword", "bravo", "modern", "prestige", "raider",
            ]),
            gpu_tokens: str_list(&["rtx", "gtx", "mx", "radeon", "iris", "arc", "vega", "uhd"]),
            detail_aliases: DetailAliases::default(),
        }
    }
}

impl Vocabulary {
    /// Parse a vocabulary from JSON text.
    pub fn from_json(json: &str) -> Result<Self, LinkError> {
        let vocab: Self = serde_json::from_str(json)?;
        vocab.validate()?;
        Ok(vocab)
    }

    /// Load a vocabulary from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LinkError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Reject vocabularies that would silently disable an extraction cascade.
    pub fn validate(&self) -> Result<(), LinkError> {
        if self.brands.is_empty() {
            return Err(LinkError::Configuration("brand list is empty".into()));
        }
        if self.series.is_empty() {
            return Err(LinkError::Configuration("series list is empty".into()));
        }
        if self.gpu_tokens.is_empty() {
            return Err(LinkError::Configuration("gpu token list is empty".into()));
        }
        Ok(())
    }
}

/// Thresholds for the serving-time near-duplicate filter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Signature similarity (normalized Levenshtein) above which a candidate
    /// is rejected against any accepted signature.
    pub similarity_threshold: f64,
    /// Same-brand significant-model-word overlap at or above which a
    /// candidate is rejected.
    pub model_overlap_threshold: f64,
    /// Model words at or below this length are not significant.
    pub insignificant_word_max_chars: usize,
    /// Over-fetch multiplier callers should apply when querying their store.
    pub overfetch_multiplier: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: filter::SIGNATURE_SIMILARITY_THRESHOLD,
            model_overlap_threshold: filter::MODEL_WORD_OVERLAP_THRESHOLD,
            insignificant_word_max_chars: filter::INSIGNIFICANT_WORD_MAX_CHARS,
            overfetch_multiplier: filter::OVERFETCH_MULTIPLIER,
        }
    }
}

fn str_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary_validates() {
        Vocabulary::default().validate().unwrap();
    }

    #[test]
    fn from_json_roundtrips_custom_vocabulary() {
        let json = serde_json::to_string(&Vocabulary::default()).unwrap();
        let parsed = Vocabulary::from_json(&json).unwrap();
        assert_eq!(parsed.series, Vocabulary::default().series);
    }

    #[test]
    fn empty_series_list_is_a_configuration_error() {
        let mut vocab = Vocabulary::default();
        vocab.series.clear();
        let err = vocab.validate().unwrap_err();
        assert!(matches!(err, LinkError::Configuration(_)));
    }

    #[test]
    fn series_order_keeps_generic_before_specific_shadowing() {
        let vocab = Vocabulary::default();
        let legion = vocab.series.iter().position(|s| s == "legion").unwrap();
        let legion_slim = vocab.series.iter().position(|s| s == "legion slim").unwrap();
        assert!(legion < legion_slim);
    }
}
