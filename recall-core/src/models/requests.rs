use serde::{Deserialize, Serialize};

/// Input to `diagnose`. Missing fields deserialize as empty and fail validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagnoseRequest {
    pub description: String,
    pub service: String,
    pub environment: String,
}

impl DiagnoseRequest {
    pub fn new(
        description: impl Into<String>,
        service: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            service: service.into(),
            environment: environment.into(),
        }
    }
}

/// Input to `record_incident`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordIncidentRequest {
    pub description: String,
    pub service: String,
    pub environment: String,
    pub root_cause_summary: String,
    pub patch_diff: Option<String>,
}

impl RecordIncidentRequest {
    pub fn new(
        description: impl Into<String>,
        service: impl Into<String>,
        environment: impl Into<String>,
        root_cause_summary: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            service: service.into(),
            environment: environment.into(),
            root_cause_summary: root_cause_summary.into(),
            patch_diff: None,
        }
    }

    pub fn with_patch_diff(mut self, patch_diff: impl Into<String>) -> Self {
        self.patch_diff = Some(patch_diff.into());
        self
    }
}
