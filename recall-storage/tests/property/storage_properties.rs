//! Property tests: both backends agree on what they store and return.

use proptest::prelude::*;
use recall_core::models::{IncidentDraft, TagFilter};
use recall_core::traits::{IIncidentStorage, IVectorIndex};
use recall_storage::{InMemoryIncidentStore, StorageEngine};

const DIMS: usize = 4;

fn draft_strategy() -> impl Strategy<Value = IncidentDraft> {
    (
        "[a-z ]{1,20}",
        prop::sample::select(vec!["payments", "auth", "search"]),
        prop::sample::select(vec!["prod", "staging"]),
        prop::collection::vec(-1.0f32..1.0, DIMS),
    )
        .prop_map(|(description, service, environment, embedding)| {
            IncidentDraft::new(description, service, environment, "cause", embedding)
        })
}

proptest! {
    #[test]
    fn sqlite_round_trips_every_field(drafts in prop::collection::vec(draft_strategy(), 1..20)) {
        let engine = StorageEngine::open_in_memory(DIMS).unwrap();
        for draft in drafts {
            let stored = engine.insert(draft).unwrap();
            let loaded = engine.get_by_id(&stored.id).unwrap().unwrap();
            prop_assert_eq!(loaded, stored);
        }
    }

    #[test]
    fn knn_only_returns_filtered_records(
        drafts in prop::collection::vec(draft_strategy(), 0..30),
        query in prop::collection::vec(-1.0f32..1.0, DIMS),
        k in 1usize..10,
    ) {
        let engine = StorageEngine::open_in_memory(DIMS).unwrap();
        for draft in drafts {
            engine.insert(draft).unwrap();
        }
        let filter = TagFilter::new("payments", "prod");
        let index = engine.as_vector_index().unwrap();
        let hits = index.query_knn(&query, &filter, k).unwrap();
        prop_assert!(hits.len() <= k);
        for hit in &hits {
            prop_assert!(filter.matches(&hit.incident));
        }
        for pair in hits.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn backends_hold_the_same_records(drafts in prop::collection::vec(draft_strategy(), 0..20)) {
        let sqlite = StorageEngine::open_in_memory(DIMS).unwrap();
        let memory = InMemoryIncidentStore::new(DIMS);
        for (i, draft) in drafts.into_iter().enumerate() {
            let draft = draft.with_id(format!("id-{i:03}"));
            sqlite.insert(draft.clone()).unwrap();
            memory.insert(draft).unwrap();
        }
        let mut a = sqlite.scan_all().unwrap();
        let mut b = memory.scan_all().unwrap();
        a.sort_by(|x, y| x.id.cmp(&y.id));
        b.sort_by(|x, y| x.id.cmp(&y.id));
        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            prop_assert_eq!(&x.id, &y.id);
            prop_assert_eq!(&x.embedding, &y.embedding);
            prop_assert_eq!(&x.service, &y.service);
        }
    }
}
