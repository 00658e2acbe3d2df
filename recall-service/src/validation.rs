//! Request validation. Runs before any embedding or store call.

use recall_core::errors::{RecallError, RecallResult};
use recall_core::models::{DiagnoseRequest, RecordIncidentRequest};

fn require(field: &str, value: &str, missing: &mut Vec<String>) {
    if value.trim().is_empty() {
        missing.push(field.to_string());
    }
}

fn finish(missing: Vec<String>) -> RecallResult<()> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(RecallError::ValidationError(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// `description`, `service` and `environment` must be non-blank.
pub fn validate_diagnose(req: &DiagnoseRequest) -> RecallResult<()> {
    let mut missing = Vec::new();
    require("description", &req.description, &mut missing);
    require("service", &req.service, &mut missing);
    require("environment", &req.environment, &mut missing);
    finish(missing)
}

/// Adds `rootCauseSummary` to the diagnose requirements. `patchDiff` is optional.
pub fn validate_record(req: &RecordIncidentRequest) -> RecallResult<()> {
    let mut missing = Vec::new();
    require("description", &req.description, &mut missing);
    require("service", &req.service, &mut missing);
    require("environment", &req.environment, &mut missing);
    require("rootCauseSummary", &req.root_cause_summary, &mut missing);
    finish(missing)
}
