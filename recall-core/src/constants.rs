/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator used when joining incident fields into embedding input.
/// Ingestion and query paths must share it or scores stop being comparable.
pub const EMBEDDING_FIELD_SEPARATOR: &str = " | ";

/// Similarity strictly above this is a `high` confidence match.
pub const HIGH_CONFIDENCE_SIMILARITY: f64 = 0.9;

/// Similarity strictly above this (and not above high) is `medium`.
pub const MEDIUM_CONFIDENCE_SIMILARITY: f64 = 0.7;

/// Summary emitted when no prior incident matched.
pub const NO_MATCH_MESSAGE: &str = "No similar incidents found yet. Might be a new error.";

/// Suggested-fix summary for the cold-start case.
pub const NO_MATCH_FIX_SUMMARY: &str =
    "No prior fixes. Investigate manually, then record the resolution so it can be recalled next time.";

/// Patch draft used when the top match has no stored diff.
pub const NO_PATCH_PLACEHOLDER: &str =
    "// no patch diff was stored for this incident; apply the root-cause fix manually";
