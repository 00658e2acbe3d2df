//! The SQLite fused KNN path must agree with the in-process scan path.

use recall_core::config::RetrievalConfig;
use recall_core::models::{IncidentDraft, TagFilter};
use recall_core::traits::IIncidentStorage;
use recall_retrieval::RetrievalEngine;
use recall_storage::StorageEngine;

const DIMS: usize = 8;

/// Deterministic pseudo-random vectors from a fixed seed.
fn vectors(count: usize, seed: u64) -> Vec<Vec<f32>> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            (0..DIMS)
                .map(|_| {
                    state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                    ((state >> 33) as f32 / u32::MAX as f32) * 2.0 - 1.0
                })
                .collect()
        })
        .collect()
}

fn seeded_store() -> StorageEngine {
    let store = StorageEngine::open_in_memory(DIMS).unwrap();
    let services = ["payments", "auth", "search"];
    for (i, v) in vectors(300, 7).into_iter().enumerate() {
        let draft = IncidentDraft::new(
            format!("error {i}"),
            services[i % services.len()],
            if i % 4 == 0 { "staging" } else { "prod" },
            "cause",
            v,
        );
        store.insert(draft).unwrap();
    }
    store
}

#[test]
fn native_and_scan_paths_agree() {
    let store = seeded_store();
    let native = RetrievalEngine::new(&store, RetrievalConfig::default());
    let scan = RetrievalEngine::new(
        &store,
        RetrievalConfig {
            use_native_index: false,
            ..RetrievalConfig::default()
        },
    );

    for (qi, query) in vectors(20, 99).iter().enumerate() {
        for service in ["payments", "auth", "search", "absent"] {
            let filter = TagFilter::new(service, "prod");
            let a = native.find_similar_with_limit(query, &filter, 5).unwrap();
            let b = scan.find_similar_with_limit(query, &filter, 5).unwrap();
            assert_eq!(a.len(), b.len(), "query {qi} service {service}");
            let sims_a: Vec<f64> = a.iter().map(|m| m.similarity).collect();
            let sims_b: Vec<f64> = b.iter().map(|m| m.similarity).collect();
            assert_eq!(sims_a, sims_b, "query {qi} service {service}");
            if let (Some(x), Some(y)) = (a.first(), b.first()) {
                assert_eq!(x.incident.id, y.incident.id, "top-1 differs for query {qi}");
            }
        }
    }
}

#[test]
fn default_limit_is_three() {
    let store = seeded_store();
    let engine = RetrievalEngine::new(&store, RetrievalConfig::default());
    let matches = engine
        .find_similar(&vectors(1, 3)[0], &TagFilter::new("payments", "prod"))
        .unwrap();
    assert_eq!(matches.len(), 3);
    assert!(store.count().unwrap() > 3);
}
