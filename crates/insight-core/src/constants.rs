//! Default values backing the config structs.
//!
//! The positional boosts and urgency weights are legacy constants carried
//! over from earlier review-analysis scripts; they are exposed through config
//! rather than hard-coded because they were never validated empirically.

/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Summarizer (PageRank-style ranking).
pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_CONVERGENCE: f64 = 1e-4;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_LEAD_FRACTION: f64 = 0.2;
pub const DEFAULT_TAIL_FRACTION: f64 = 0.2;
pub const DEFAULT_LEAD_BOOST: f64 = 1.5;
pub const DEFAULT_TAIL_BOOST: f64 = 1.2;

// TF-IDF vectorizer.
pub const DEFAULT_MAX_FEATURES: usize = 1000;
pub const DEFAULT_NGRAM_MAX: usize = 2;
pub const DEFAULT_MIN_DF: usize = 1;
pub const DEFAULT_MAX_DF: f64 = 0.95;

// K-means and cluster statistics.
pub const DEFAULT_KMEANS_MAX_ITERATIONS: usize = 300;
pub const DEFAULT_KMEANS_CONVERGENCE: f64 = 1e-4;
pub const DEFAULT_KMEANS_SEED: u64 = 42;
pub const DEFAULT_KMEANS_RESTARTS: usize = 10;
pub const DEFAULT_SILHOUETTE_TIE_MARGIN: f64 = 0.01;
pub const DEFAULT_URGENCY_SIZE_WEIGHT: f64 = 0.5;
pub const DEFAULT_URGENCY_SENTIMENT_WEIGHT: f64 = 0.5;
pub const DEFAULT_NEGATIVE_SENTIMENT_THRESHOLD: f64 = -0.2;
pub const DEFAULT_SAMPLE_REVIEWS: usize = 3;
pub const DEFAULT_TOP_KEYWORDS: usize = 10;
