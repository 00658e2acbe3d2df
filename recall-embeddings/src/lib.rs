//! # recall-embeddings
//!
//! Turns incident text into fixed-dimension vectors.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingEngine
//! ├── Provider (one, chosen by config, never swapped at runtime)
//! │   ├── CharBucketProvider (deterministic stub, offline)
//! │   └── ApiProvider (Voyage-compatible HTTP, timeout-bounded)
//! ├── L1MemoryCache (moka, blake3-keyed)
//! ├── Enrichment (canonical " | " field join)
//! └── Dimension check (logs + degradation event, non-fatal)
//! ```

pub mod cache;
pub mod engine;
pub mod enrichment;
pub mod providers;

pub use cache::L1MemoryCache;
pub use engine::EmbeddingEngine;
pub use providers::{create_provider, ApiProvider, CharBucketProvider};
