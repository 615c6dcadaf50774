//! Property tests for the clustering analyzer.

use proptest::prelude::*;

use insight_cluster::{analyze_clusters, persona_seeds};
use insight_core::{ClusteringConfig, Review};

const WORDS: &[&str] = &[
    "crash", "launch", "battery", "design", "support", "update", "screen", "menu", "search",
    "slow", "fast", "love", "hate", "broken", "works",
];

/// Marker token unique to review `i`. Letters only, since the tokenizer
/// strips digits; at least two characters so it survives the length filter.
fn marker(i: usize) -> String {
    "z".repeat(i + 2)
}

/// Build `n` short reviews from the word pool. The marker keeps every
/// vector distinct so the partition always has enough material.
fn corpus(seed: u64, n: usize) -> Vec<Review> {
    let mut reviews = Vec::with_capacity(n);
    let mut state = seed.wrapping_add(1);
    for i in 0..n {
        let mut words: Vec<String> = Vec::new();
        for _ in 0..4 {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            words.push(WORDS[(state >> 33) as usize % WORDS.len()].to_string());
        }
        words.push(marker(i));

        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let sentiment = ((state >> 34) % 2001) as f64 / 1000.0 - 1.0;

        let review = Review::new(format!("r{i}"), words.join(" "), sentiment);
        reviews.push(if i % 2 == 0 {
            review.with_rating(1.0 + (i % 5) as f64)
        } else {
            review
        });
    }
    reviews
}

proptest! {
    #[test]
    fn prop_partition_is_exhaustive_and_disjoint(seed in 0u64..300, n in 4usize..12) {
        let reviews = corpus(seed, n);
        let config = ClusteringConfig {
            sample_reviews: n,
            ..ClusteringConfig::default()
        };
        let summaries = analyze_clusters(&reviews, 2, 4, 8, &config).unwrap();

        let total: usize = summaries.iter().map(|s| s.size).sum();
        prop_assert_eq!(total, n);

        let mut seen: Vec<&str> = summaries
            .iter()
            .flat_map(|s| s.sample_review_ids.iter().map(String::as_str))
            .collect();
        prop_assert_eq!(seen.len(), n);
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), n);
    }

    #[test]
    fn prop_summary_fields_are_bounded(seed in 0u64..300, n in 4usize..12) {
        let reviews = corpus(seed, n);
        let config = ClusteringConfig::default();
        let summaries = analyze_clusters(&reviews, 2, 4, 8, &config).unwrap();

        for summary in &summaries {
            prop_assert!(summary.size >= 1);
            prop_assert!((0.0..=1.0).contains(&summary.urgency_score));
            prop_assert!((-1.0..=1.0).contains(&summary.avg_sentiment));
            prop_assert!(summary.keywords.len() <= 8);
            prop_assert!(summary.sample_review_ids.len() <= config.sample_reviews);
        }

        let seeds = persona_seeds(&summaries, reviews.len());
        let share: f64 = seeds.iter().map(|s| s.segment_share).sum();
        prop_assert!((share - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_deterministic(seed in 0u64..300, n in 4usize..10) {
        let reviews = corpus(seed, n);
        let a = analyze_clusters(&reviews, 2, 4, 8, &ClusteringConfig::default()).unwrap();
        let b = analyze_clusters(&reviews, 2, 4, 8, &ClusteringConfig::default()).unwrap();
        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            prop_assert_eq!(x.size, y.size);
            prop_assert_eq!(&x.keywords, &y.keywords);
            prop_assert_eq!(&x.sample_review_ids, &y.sample_review_ids);
        }
    }
}
