/// Normalized attribute value (lower-cased, trimmed; empty when extraction missed).
/// Examples: `lenovo`, `ryzen`, `512gb`, ``
pub type AttributeValue = String;
/// Identifier for the source that produced a record.
/// Examples: `amazon`, `flipkart`
pub type SourceName = String;
/// Detail-map field name as received from a source (conventions vary per source).
/// Examples: `RAM`, `Memory`, `Graphic Processor`
pub type DetailKey = String;
/// Deterministic composite key used for exact-match bucketing between sources.
/// Example: `hp|pavilion|i5|11|1135G7|8|512gb|ssd|`
pub type MatchKey = String;
/// Normalized, punctuation-stripped concatenation used only for fuzzy comparison.
/// Example: `hp|pavilion15|i5|8gb|512gb||`
pub type Signature = String;
/// A significant word taken from a model string during near-duplicate checks.
/// Examples: `pavilion`, `x360`
pub type ModelWord = String;
