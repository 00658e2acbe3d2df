use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Maximum matches returned per diagnosis.
    pub default_limit: usize,
    /// Use the store's fused filter+KNN query when it offers one.
    pub use_native_index: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_limit: defaults::DEFAULT_MATCH_LIMIT,
            use_native_index: defaults::DEFAULT_USE_NATIVE_INDEX,
        }
    }
}
