//! Input and output records for the review-insight engine.
//!
//! `Review` is the clustering input; `ClusterSummary` and `PersonaSeed` are
//! the serializable output contracts. The core never mutates a `Review` after
//! construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One product/app-store review.
///
/// `sentiment` is a precomputed scalar in [-1, 1] supplied by an external
/// sentiment scorer; the core treats it as opaque input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier supplied by the caller.
    pub id: String,
    /// Raw review text.
    pub text: String,
    /// Optional numeric rating (e.g. 1.0–5.0 stars).
    pub rating: Option<f64>,
    /// Precomputed sentiment in [-1, 1].
    pub sentiment: f64,
    /// Optional review timestamp.
    pub timestamp: Option<DateTime<Utc>>,
}

impl Review {
    /// Convenience constructor for a review without rating or timestamp.
    pub fn new(id: impl Into<String>, text: impl Into<String>, sentiment: f64) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            rating: None,
            sentiment,
            timestamp: None,
        }
    }

    /// Set the numeric rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// Per-cluster descriptive statistics.
///
/// Created fresh on every clustering run; never persisted across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster_id: usize,
    /// Number of member reviews.
    pub size: usize,
    /// Top vocabulary terms by mean TF-IDF weight among members.
    pub keywords: Vec<String>,
    /// Mean rating over members that carry one; `None` when no member does.
    pub avg_rating: Option<f64>,
    /// Mean sentiment over members.
    pub avg_sentiment: f64,
    /// Heuristic attention proxy in [0, 1]: weighted combination of cluster
    /// size share and negative-sentiment share. Not a validated metric.
    pub urgency_score: f64,
    /// Up to `sample_reviews` member ids, highest |sentiment| first.
    pub sample_review_ids: Vec<String>,
}

/// Denormalized per-cluster record consumed by external persona generation.
///
/// Output contract only: the demographic placeholders are filled in by the
/// downstream collaborator, never by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaSeed {
    pub cluster_id: usize,
    /// Fraction of the corpus this segment represents.
    pub segment_share: f64,
    /// Pain-point keywords inherited from the cluster summary.
    pub pain_point_keywords: Vec<String>,
    /// Review ids backing this segment.
    pub evidence_review_ids: Vec<String>,
    /// Demographic placeholder, left empty by the core.
    pub age_range: Option<String>,
    /// Demographic placeholder, left empty by the core.
    pub occupation: Option<String>,
}
