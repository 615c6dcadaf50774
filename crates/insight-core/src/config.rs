//! Per-call configuration.
//!
//! The core is pure: there is no process-wide state, so every tunable is an
//! explicit struct passed into each call.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Extractive summarizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// PageRank damping factor.
    pub damping: f64,
    /// Convergence tolerance for the rank iteration.
    pub convergence: f64,
    /// Iteration cap (guarantees termination).
    pub max_iterations: usize,
    /// Fraction of the document counted as the lead.
    pub lead_fraction: f64,
    /// Fraction of the document counted as the tail.
    pub tail_fraction: f64,
    /// Score multiplier for lead sentences.
    pub lead_boost: f64,
    /// Score multiplier for tail sentences.
    pub tail_boost: f64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            damping: constants::DEFAULT_DAMPING,
            convergence: constants::DEFAULT_CONVERGENCE,
            max_iterations: constants::DEFAULT_MAX_ITERATIONS,
            lead_fraction: constants::DEFAULT_LEAD_FRACTION,
            tail_fraction: constants::DEFAULT_TAIL_FRACTION,
            lead_boost: constants::DEFAULT_LEAD_BOOST,
            tail_boost: constants::DEFAULT_TAIL_BOOST,
        }
    }
}

/// TF-IDF vectorizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Vocabulary cap; highest-document-frequency terms are kept.
    pub max_features: usize,
    /// Maximum n-gram length (2 = unigrams + bigrams).
    pub ngram_max: usize,
    /// Terms in fewer documents than this are pruned.
    pub min_df: usize,
    /// Terms in more than this fraction of documents are pruned.
    pub max_df: f64,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_features: constants::DEFAULT_MAX_FEATURES,
            ngram_max: constants::DEFAULT_NGRAM_MAX,
            min_df: constants::DEFAULT_MIN_DF,
            max_df: constants::DEFAULT_MAX_DF,
        }
    }
}

/// Clustering analyzer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Vectorizer settings for the review corpus.
    pub vectorizer: VectorizerConfig,
    /// K-means iteration cap.
    pub max_iterations: usize,
    /// K-means centroid-shift convergence tolerance.
    pub convergence: f64,
    /// RNG seed for k-means++ initialization (fixed for determinism).
    pub seed: u64,
    /// Independent k-means restarts per candidate k; lowest inertia wins.
    pub n_init: usize,
    /// Two k candidates within this silhouette margin tie-break to smaller k.
    pub silhouette_tie_margin: f64,
    /// Urgency weight on cluster size share.
    pub urgency_size_weight: f64,
    /// Urgency weight on negative-sentiment share.
    pub urgency_sentiment_weight: f64,
    /// Sentiment below this counts toward the negative fraction.
    pub negative_sentiment_threshold: f64,
    /// Sample review ids reported per cluster.
    pub sample_reviews: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            vectorizer: VectorizerConfig::default(),
            max_iterations: constants::DEFAULT_KMEANS_MAX_ITERATIONS,
            convergence: constants::DEFAULT_KMEANS_CONVERGENCE,
            seed: constants::DEFAULT_KMEANS_SEED,
            n_init: constants::DEFAULT_KMEANS_RESTARTS,
            silhouette_tie_margin: constants::DEFAULT_SILHOUETTE_TIE_MARGIN,
            urgency_size_weight: constants::DEFAULT_URGENCY_SIZE_WEIGHT,
            urgency_sentiment_weight: constants::DEFAULT_URGENCY_SENTIMENT_WEIGHT,
            negative_sentiment_threshold: constants::DEFAULT_NEGATIVE_SENTIMENT_THRESHOLD,
            sample_reviews: constants::DEFAULT_SAMPLE_REVIEWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let cfg = SummarizerConfig::default();
        assert_eq!(cfg.damping, 0.85);
        assert_eq!(cfg.lead_boost, 1.5);
        assert_eq!(cfg.tail_boost, 1.2);

        let cfg = ClusteringConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.max_iterations, 300);
        assert_eq!(cfg.sample_reviews, 3);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: ClusteringConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.max_iterations, 300);
        assert_eq!(cfg.vectorizer.max_features, 1000);
    }
}
