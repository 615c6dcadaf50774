//! # insight-cluster
//!
//! Clustering analyzer for review corpora: TF-IDF vectorization, k-means
//! partitioning with a silhouette-driven optimal-k search, and per-cluster
//! statistics (keywords, sentiment/rating means, urgency, persona seeds).
//!
//! Each call is stateless and call-local; the fitted vectorizer and all
//! intermediate matrices are discarded when the call returns.

pub mod kmeans;
pub mod persona;
pub mod pipeline;
pub mod silhouette;
pub mod stats;
pub mod tfidf;

pub use persona::persona_seeds;
pub use pipeline::{analyze_clusters, analyze_clusters_default};
pub use tfidf::TfidfVectorizer;
