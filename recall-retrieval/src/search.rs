//! Brute-force ranking over an in-memory record set.

use recall_core::models::{IncidentRecord, MatchResult, TagFilter};
use recall_core::similarity::cosine_similarity;

/// Up to `limit` records passing `filter`, by similarity descending.
///
/// Filtering happens before ranking, so a non-matching record can never
/// displace a matching one. Ties keep no particular order. Records whose
/// embedding length differs from the query score 0 and still rank.
pub fn find_similar(
    query: &[f32],
    filter: &TagFilter,
    records: &[IncidentRecord],
    limit: usize,
) -> Vec<MatchResult> {
    if limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<MatchResult> = records
        .iter()
        .filter(|r| filter.matches(r))
        .map(|r| MatchResult::new(r.clone(), cosine_similarity(query, &r.embedding)))
        .collect();

    scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use recall_core::models::IncidentDraft;

    use super::*;

    fn record(id: &str, service: &str, embedding: Vec<f32>) -> IncidentRecord {
        IncidentDraft::new("d", service, "prod", "r", embedding)
            .with_id(id)
            .into_record()
    }

    #[test]
    fn returns_top_three_in_order() {
        let records = vec![
            record("a", "svc", vec![1.0, 0.0]),
            record("b", "svc", vec![0.9, 0.1]),
            record("c", "svc", vec![0.5, 0.5]),
            record("d", "svc", vec![0.0, 1.0]),
        ];
        let hits = find_similar(&[1.0, 0.0], &TagFilter::new("svc", "prod"), &records, 3);
        let ids: Vec<_> = hits.iter().map(|m| m.incident.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn filter_runs_before_ranking() {
        let records = vec![
            record("other", "billing", vec![1.0, 0.0]),
            record("mine", "svc", vec![0.0, 1.0]),
        ];
        let hits = find_similar(&[1.0, 0.0], &TagFilter::new("svc", "prod"), &records, 1);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].incident.id, "mine");
        assert_eq!(hits[0].similarity, 0.0);
    }

    #[test]
    fn empty_when_nothing_matches_filter() {
        let records = vec![record("a", "svc", vec![1.0])];
        assert!(find_similar(&[1.0], &TagFilter::new("nope", "prod"), &records, 3).is_empty());
    }

    #[test]
    fn fewer_than_limit_returns_all() {
        let records = vec![record("a", "svc", vec![1.0]), record("b", "svc", vec![-1.0])];
        let hits = find_similar(&[1.0], &TagFilter::new("svc", "prod"), &records, 3);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].similarity, -1.0);
    }

    #[test]
    fn mismatched_dimension_scores_zero() {
        let records = vec![record("short", "svc", vec![1.0])];
        let hits = find_similar(&[1.0, 0.0], &TagFilter::new("svc", "prod"), &records, 3);
        assert_eq!(hits[0].similarity, 0.0);
        assert_eq!(hits[0].distance, 1.0);
    }
}
