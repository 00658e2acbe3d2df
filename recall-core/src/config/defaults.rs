// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_STORAGE_BACKEND: &str = "memory";
pub const DEFAULT_DB_FILENAME: &str = "incidents.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "stub";
pub const DEFAULT_EMBEDDING_MODEL: &str = "voyage-3.5-lite";
pub const DEFAULT_EMBEDDING_ENDPOINT: &str = "https://api.voyageai.com/v1/embeddings";
pub const DEFAULT_API_KEY_ENV: &str = "VOYAGE_API_KEY";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1024;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 10_000;

// --- Retrieval ---
pub const DEFAULT_MATCH_LIMIT: usize = 3;
pub const DEFAULT_USE_NATIVE_INDEX: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
