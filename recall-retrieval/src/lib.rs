//! # recall-retrieval
//!
//! Turns a query vector plus a tag filter into a ranked match list, and a
//! ranked match list into a `Diagnosis`.
//!
//! ```text
//! query vector + TagFilter
//!   -> native fused KNN (when the store has one)
//!      or scan_all + search::find_similar
//!   -> top-k MatchResult, similarity descending
//!   -> diagnosis::assemble
//! ```

pub mod diagnosis;
pub mod engine;
pub mod search;

pub use diagnosis::assemble;
pub use engine::RetrievalEngine;
pub use search::find_similar;
