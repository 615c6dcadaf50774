//! Clustering pipeline orchestrator: tokenize → vectorize → optimal-k
//! search → per-cluster statistics.

use std::collections::HashSet;

use insight_core::{ClusterSummary, ClusteringConfig, InsightError, InsightResult, Review};
use insight_summarize::tokenize::normalize;
use tracing::{debug, info};

use crate::kmeans::{self, KMeansFit};
use crate::silhouette::silhouette_score;
use crate::stats;
use crate::tfidf::TfidfVectorizer;

/// Partition reviews into an unsupervised number of clusters and summarize
/// each one.
///
/// For every candidate k in `[k_min, k_max]` a seeded k-means partition is
/// scored by silhouette; the best-scoring k wins, with ties inside
/// `silhouette_tie_margin` breaking toward the smaller (simpler) k.
/// Summaries come back ordered by cluster id, and every review index appears
/// in exactly one cluster.
///
/// # Errors
///
/// - `InvalidParameter` for `k_min < 2` or `k_min > k_max`.
/// - `InsufficientData` when fewer distinct reviews than `k_min` exist.
/// - `Vectorization` when the corpus vocabulary prunes to nothing.
pub fn analyze_clusters(
    reviews: &[Review],
    k_min: usize,
    k_max: usize,
    top_keywords: usize,
    config: &ClusteringConfig,
) -> InsightResult<Vec<ClusterSummary>> {
    if k_min < 2 {
        return Err(InsightError::invalid_parameter(
            "k_min",
            k_min,
            "must be >= 2",
        ));
    }
    if k_min > k_max {
        return Err(InsightError::invalid_parameter(
            "k_max",
            k_max,
            format!("must be >= k_min ({k_min})"),
        ));
    }
    if reviews.len() < k_min {
        return Err(InsightError::InsufficientData {
            needed: k_min,
            available: reviews.len(),
        });
    }

    // Phase 1: tokenize and vectorize.
    let corpus: Vec<Vec<String>> = reviews.iter().map(|r| normalize(&r.text)).collect();
    let vectorizer = TfidfVectorizer::fit(&corpus, &config.vectorizer)?;
    let matrix = vectorizer.matrix();
    info!(
        reviews = reviews.len(),
        vocabulary = vectorizer.vocabulary().len(),
        "vectorized review corpus"
    );

    // Byte-identical rows collapse for the distinctness check; clustering
    // into more groups than distinct points cannot succeed.
    let distinct = distinct_rows(matrix);
    if distinct < k_min {
        return Err(InsightError::InsufficientData {
            needed: k_min,
            available: distinct,
        });
    }
    let k_max = k_max.min(distinct);

    // Phase 2: optimal-k search.
    let (chosen_k, fit) = select_k(matrix, k_min, k_max, config);
    info!(chosen_k, "selected cluster count");

    // Phase 3: per-cluster statistics, ordered by cluster id.
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); chosen_k];
    for (i, &label) in fit.labels.iter().enumerate() {
        members[label].push(i);
    }

    let summaries = members
        .iter()
        .enumerate()
        .map(|(cluster_id, indices)| {
            stats::summarize_cluster(
                cluster_id,
                indices,
                matrix,
                vectorizer.vocabulary(),
                reviews,
                reviews.len(),
                top_keywords,
                config,
            )
        })
        .collect();

    Ok(summaries)
}

/// `analyze_clusters` with the default configuration.
pub fn analyze_clusters_default(
    reviews: &[Review],
    k_min: usize,
    k_max: usize,
    top_keywords: usize,
) -> InsightResult<Vec<ClusterSummary>> {
    analyze_clusters(reviews, k_min, k_max, top_keywords, &ClusteringConfig::default())
}

/// Run k-means for each candidate k and keep the silhouette winner.
///
/// Every candidate is scored before any selection happens; the winner is the
/// smallest k whose silhouette lies within `silhouette_tie_margin` of the
/// maximum, so near-ties with the best score resolve to the simpler
/// partition.
fn select_k(
    matrix: &[Vec<f64>],
    k_min: usize,
    k_max: usize,
    config: &ClusteringConfig,
) -> (usize, KMeansFit) {
    let mut fits = Vec::with_capacity(k_max - k_min + 1);
    let mut scores = Vec::with_capacity(k_max - k_min + 1);
    for k in k_min..=k_max {
        let fit = kmeans::fit(matrix, k, config);
        let score = silhouette_score(matrix, &fit.labels, k);
        debug!(k, silhouette = score, inertia = fit.inertia, "candidate partition");
        fits.push(fit);
        scores.push(score);
    }

    let chosen = smallest_within_margin(&scores, config.silhouette_tie_margin);
    (k_min + chosen, fits.swap_remove(chosen))
}

/// Index of the first score within `margin` of the maximum.
fn smallest_within_margin(scores: &[f64], margin: f64) -> usize {
    let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    scores
        .iter()
        .position(|&s| s >= best - margin)
        // The maximum itself qualifies; this arm is unreachable for a
        // non-empty candidate list.
        .unwrap_or_else(|| scores.len().saturating_sub(1))
}

/// Number of byte-identical-distinct rows.
fn distinct_rows(matrix: &[Vec<f64>]) -> usize {
    let mut seen: HashSet<Vec<u64>> = HashSet::new();
    for row in matrix {
        seen.insert(row.iter().map(|v| v.to_bits()).collect());
    }
    seen.len()
}
