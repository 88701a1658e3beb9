/// Constants used by match-key construction.
pub mod key {
    /// Separator joining the ordered key fields.
    ///
    /// Field values are sanitized against this character before joining, so
    /// the encoding is unambiguous without an escape scheme.
    pub const KEY_SEPARATOR: char = '|';
    /// Number of fields that participate in a match key, in join order:
    /// brand, series, processor name, processor generation, processor
    /// variant, ram size, storage size, storage kind, gpu.
    pub const KEY_FIELD_COUNT: usize = 9;
}

/// Constants used by the near-duplicate filter defaults.
pub mod filter {
    /// Signatures more similar than this (normalized Levenshtein) are rejected.
    pub const SIGNATURE_SIMILARITY_THRESHOLD: f64 = 0.85;
    /// Same-brand model-word overlap at or above this fraction is rejected.
    pub const MODEL_WORD_OVERLAP_THRESHOLD: f64 = 0.60;
    /// Model words at or below this length are ignored during overlap checks.
    pub const INSIGNIFICANT_WORD_MAX_CHARS: usize = 2;
    /// Candidates fetched per requested result to compensate for rejections.
    pub const OVERFETCH_MULTIPLIER: usize = 3;
    /// Separator joining signature segments.
    pub const SIGNATURE_SEPARATOR: char = '|';
}

/// Constants used by attribute extraction.
pub mod extract {
    /// Unit tokens stripped uniformly before any numeric parse.
    pub const UNIT_TOKENS: [&str; 7] = ["gb", "tb", "inches", "inch", "cm", "in", "″"];
    /// Storage kind reported when an SSD flag is present.
    pub const STORAGE_KIND_SSD: &str = "ssd";
    /// Storage kind reported when an eMMC flag is present.
    pub const STORAGE_KIND_EMMC: &str = "emmc";
    /// Storage kind reported when an HDD flag is present.
    pub const STORAGE_KIND_HDD: &str = "hdd";
}
