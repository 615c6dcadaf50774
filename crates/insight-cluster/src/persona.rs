//! Persona seeds: the denormalized output contract consumed by external
//! persona generation. The core fills segment evidence only; demographic
//! placeholders stay empty for the downstream collaborator.

use insight_core::{ClusterSummary, PersonaSeed};

/// Derive one persona seed per cluster summary.
pub fn persona_seeds(summaries: &[ClusterSummary], total_reviews: usize) -> Vec<PersonaSeed> {
    summaries
        .iter()
        .map(|s| PersonaSeed {
            cluster_id: s.cluster_id,
            segment_share: if total_reviews == 0 {
                0.0
            } else {
                s.size as f64 / total_reviews as f64
            },
            pain_point_keywords: s.keywords.clone(),
            evidence_review_ids: s.sample_review_ids.clone(),
            age_range: None,
            occupation: None,
        })
        .collect()
}
