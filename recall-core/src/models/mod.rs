mod degradation_event;
mod diagnosis;
mod health_report;
mod incident;
mod match_result;
mod requests;
mod tag_filter;

pub use degradation_event::DegradationEvent;
pub use diagnosis::{ConfidenceTier, Diagnosis, SuggestedFix};
pub use health_report::{HealthReport, HealthStatus};
pub use incident::{IncidentDraft, IncidentListing, IncidentRecord};
pub use match_result::MatchResult;
pub use requests::{DiagnoseRequest, RecordIncidentRequest};
pub use tag_filter::TagFilter;
