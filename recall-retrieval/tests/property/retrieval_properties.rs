//! Property tests for ranking: filter is absolute, length bounded, order sorted.

use proptest::prelude::*;
use recall_core::models::{IncidentDraft, IncidentRecord, TagFilter};
use recall_retrieval::{assemble, find_similar};

const DIMS: usize = 4;

fn record_strategy() -> impl Strategy<Value = IncidentRecord> {
    (
        prop::sample::select(vec!["payments", "auth"]),
        prop::sample::select(vec!["prod", "staging"]),
        prop::collection::vec(-1.0f32..1.0, DIMS),
    )
        .prop_map(|(service, environment, embedding)| {
            IncidentDraft::new("d", service, environment, "r", embedding).into_record()
        })
}

proptest! {
    #[test]
    fn results_pass_filter_bounded_and_sorted(
        records in prop::collection::vec(record_strategy(), 0..50),
        query in prop::collection::vec(-1.0f32..1.0, DIMS),
        limit in 0usize..8,
    ) {
        let filter = TagFilter::new("payments", "prod");
        let hits = find_similar(&query, &filter, &records, limit);

        let eligible = records.iter().filter(|r| filter.matches(r)).count();
        prop_assert_eq!(hits.len(), eligible.min(limit));
        for hit in &hits {
            prop_assert!(filter.matches(&hit.incident));
            prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&hit.similarity));
        }
        for pair in hits.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn nothing_eligible_scores_above_the_last_hit(
        records in prop::collection::vec(record_strategy(), 1..40),
        query in prop::collection::vec(-1.0f32..1.0, DIMS),
    ) {
        let filter = TagFilter::new("auth", "staging");
        let hits = find_similar(&query, &filter, &records, 3);
        if let Some(last) = hits.last() {
            let returned: Vec<&str> = hits.iter().map(|m| m.incident.id.as_str()).collect();
            for r in records.iter().filter(|r| filter.matches(r) && !returned.contains(&r.id.as_str())) {
                let s = recall_core::cosine_similarity(&query, &r.embedding);
                prop_assert!(s <= last.similarity);
            }
        }
    }

    #[test]
    fn diagnosis_follows_top_match(
        records in prop::collection::vec(record_strategy(), 0..20),
        query in prop::collection::vec(-1.0f32..1.0, DIMS),
    ) {
        let filter = TagFilter::new("payments", "prod");
        let hits = find_similar(&query, &filter, &records, 3);
        let top = hits.first().map(|m| m.similarity);
        let diagnosis = assemble(hits);
        match top {
            None => prop_assert!(diagnosis.message.is_some()),
            Some(s) => {
                prop_assert!(diagnosis.message.is_none());
                prop_assert_eq!(
                    diagnosis.suggested_fix.confidence,
                    recall_core::ConfidenceTier::from_similarity(s)
                );
            }
        }
    }
}
