use std::fmt;

use serde::{Deserialize, Serialize};

use super::MatchResult;
use crate::constants::{HIGH_CONFIDENCE_SIMILARITY, MEDIUM_CONFIDENCE_SIMILARITY};

/// Coarse confidence bucket derived from a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    /// `> 0.9` is high, `(0.7, 0.9]` is medium, anything else is low.
    /// Both boundaries are exclusive on the upper tier.
    pub fn from_similarity(similarity: f64) -> Self {
        if similarity > HIGH_CONFIDENCE_SIMILARITY {
            Self::High
        } else if similarity > MEDIUM_CONFIDENCE_SIMILARITY {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

/// Fix suggested for a new incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedFix {
    pub summary: String,
    /// Absent in the cold-start case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_diff_draft: Option<String>,
    pub confidence: ConfidenceTier,
}

/// Outcome of a diagnosis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    /// Set only when nothing matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Full ranked list, best first.
    pub matches: Vec<MatchResult>,
    pub suggested_fix: SuggestedFix,
}

impl Diagnosis {
    pub fn top_match(&self) -> Option<&MatchResult> {
        self.matches.first()
    }
}
