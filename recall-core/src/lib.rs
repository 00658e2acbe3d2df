//! # recall-core
//!
//! Foundation crate for the incident recall engine.
//! Defines the incident data model, capability traits, errors, config,
//! constants, and the cosine similarity used by every ranking path.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod similarity;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RecallConfig;
pub use errors::{RecallError, RecallResult};
pub use models::{
    ConfidenceTier, Diagnosis, IncidentDraft, IncidentRecord, MatchResult, SuggestedFix,
    TagFilter,
};
pub use similarity::cosine_similarity;
