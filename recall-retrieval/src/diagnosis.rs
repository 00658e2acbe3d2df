//! Match list to `Diagnosis`.

use recall_core::constants::{NO_MATCH_FIX_SUMMARY, NO_MATCH_MESSAGE, NO_PATCH_PLACEHOLDER};
use recall_core::models::{ConfidenceTier, Diagnosis, MatchResult, SuggestedFix};

/// Build the diagnosis for a ranked match list.
///
/// Only the top match drives the suggested fix; the rest ride along for the
/// caller to inspect. No matches yields the cold-start diagnosis with low
/// confidence and no patch.
pub fn assemble(matches: Vec<MatchResult>) -> Diagnosis {
    let suggested_fix = match matches.first() {
        None => {
            return Diagnosis {
                message: Some(NO_MATCH_MESSAGE.to_string()),
                matches,
                suggested_fix: SuggestedFix {
                    summary: NO_MATCH_FIX_SUMMARY.to_string(),
                    patch_diff_draft: None,
                    confidence: ConfidenceTier::Low,
                },
            };
        }
        Some(top) => SuggestedFix {
            summary: top.incident.root_cause_summary.clone(),
            patch_diff_draft: Some(
                top.incident
                    .patch_diff
                    .clone()
                    .unwrap_or_else(|| NO_PATCH_PLACEHOLDER.to_string()),
            ),
            confidence: ConfidenceTier::from_similarity(top.similarity),
        },
    };

    Diagnosis {
        message: None,
        matches,
        suggested_fix,
    }
}
