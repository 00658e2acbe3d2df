//! Property tests: cosine similarity symmetry, self-similarity, mismatch handling.

use proptest::prelude::*;

use recall_core::similarity::cosine_similarity;

fn vector(len: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-100.0f32..100.0, len)
}

fn non_zero_vector() -> impl Strategy<Value = Vec<f32>> {
    (1usize..64)
        .prop_flat_map(vector)
        .prop_filter("needs non-zero magnitude", |v| {
            v.iter().any(|x| x.abs() > 1e-3)
        })
}

proptest! {
    #[test]
    fn prop_self_similarity_is_one(v in non_zero_vector()) {
        let sim = cosine_similarity(&v, &v);
        prop_assert!((sim - 1.0).abs() < 1e-9, "got {}", sim);
    }

    #[test]
    fn prop_commutative(
        (a, b) in (1usize..64).prop_flat_map(|n| (vector(n), vector(n)))
    ) {
        prop_assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn prop_length_mismatch_is_zero(
        a in prop::collection::vec(-10.0f32..10.0, 1..32),
        extra in 1usize..8,
    ) {
        let mut b = a.clone();
        b.extend(std::iter::repeat(1.0).take(extra));
        prop_assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn prop_identity_maximizes(v in non_zero_vector()) {
        let opposite: Vec<f32> = v.iter().map(|x| -x).collect();
        let self_sim = cosine_similarity(&v, &v);
        let opp_sim = cosine_similarity(&v, &opposite);
        prop_assert!(opp_sim <= self_sim);
        // Shifted into [0, 2] the opposite vector sits at the bottom.
        prop_assert!(opp_sim + 1.0 >= -1e-9);
    }

    #[test]
    fn prop_bounded(
        (a, b) in (1usize..64).prop_flat_map(|n| (vector(n), vector(n)))
    ) {
        let sim = cosine_similarity(&a, &b);
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&sim));
    }
}
