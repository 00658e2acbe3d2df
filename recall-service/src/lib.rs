//! # recall-service
//!
//! The operations a transport layer exposes: `diagnose`, `record_incident`,
//! `list_incidents`, `get_incident`, `health`. Owns one store and one
//! embedding engine, both chosen by configuration.

pub mod memory;
pub mod tracing_setup;
pub mod validation;

pub use memory::IncidentMemory;
pub use tracing_setup::init_tracing;
