use std::io;

use thiserror::Error;

/// Error type for vocabulary loading and configuration failures.
///
/// Data-quality problems (unparseable attributes, malformed numerics,
/// empty join buckets) are never errors; they normalize to empty or zero
/// values per the extraction contract.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("vocabulary file could not be read: {0}")]
    Io(#[from] io::Error),
    #[error("vocabulary file could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}
