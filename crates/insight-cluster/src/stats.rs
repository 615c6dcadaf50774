//! Per-cluster descriptive statistics: keywords, rating/sentiment means,
//! urgency, and sample reviews.

use insight_core::{ClusterSummary, ClusteringConfig, Review};

/// Summarize one cluster.
///
/// Keywords are the `top_keywords` vocabulary terms with the highest mean
/// TF-IDF weight among member rows. The urgency score is a heuristic proxy
/// (size share and negative-sentiment share, weighted and clipped to [0, 1]),
/// not a validated metric.
#[allow(clippy::too_many_arguments)]
pub fn summarize_cluster(
    cluster_id: usize,
    members: &[usize],
    matrix: &[Vec<f64>],
    vocabulary: &[String],
    reviews: &[Review],
    total_reviews: usize,
    top_keywords: usize,
    config: &ClusteringConfig,
) -> ClusterSummary {
    let size = members.len();

    // Mean TF-IDF weight per vocabulary term across member rows.
    let mut mean_weights = vec![0.0f64; vocabulary.len()];
    for &m in members {
        for (w, v) in mean_weights.iter_mut().zip(&matrix[m]) {
            *w += v;
        }
    }
    if size > 0 {
        for w in &mut mean_weights {
            *w /= size as f64;
        }
    }

    let mut ranked: Vec<(usize, f64)> = mean_weights
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, w)| *w > 0.0)
        .collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| vocabulary[a.0].cmp(&vocabulary[b.0]))
    });
    let keywords: Vec<String> = ranked
        .iter()
        .take(top_keywords)
        .map(|&(i, _)| vocabulary[i].clone())
        .collect();

    // Simple arithmetic means; rating only over members that carry one.
    let rated: Vec<f64> = members
        .iter()
        .filter_map(|&m| reviews[m].rating)
        .collect();
    let avg_rating = if rated.is_empty() {
        None
    } else {
        Some(rated.iter().sum::<f64>() / rated.len() as f64)
    };
    let avg_sentiment = if size == 0 {
        0.0
    } else {
        members.iter().map(|&m| reviews[m].sentiment).sum::<f64>() / size as f64
    };

    let urgency_score = urgency(members, reviews, total_reviews, config);

    // Up to `sample_reviews` ids, strongest sentiment magnitude first.
    let mut by_magnitude: Vec<usize> = members.to_vec();
    by_magnitude.sort_by(|&a, &b| {
        reviews[b]
            .sentiment
            .abs()
            .partial_cmp(&reviews[a].sentiment.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    let sample_review_ids: Vec<String> = by_magnitude
        .iter()
        .take(config.sample_reviews)
        .map(|&m| reviews[m].id.clone())
        .collect();

    ClusterSummary {
        cluster_id,
        size,
        keywords,
        avg_rating,
        avg_sentiment,
        urgency_score,
        sample_review_ids,
    }
}

/// `urgency = w_size * size_share + w_neg * negative_fraction`, clipped.
fn urgency(
    members: &[usize],
    reviews: &[Review],
    total_reviews: usize,
    config: &ClusteringConfig,
) -> f64 {
    if members.is_empty() || total_reviews == 0 {
        return 0.0;
    }
    let size_share = members.len() as f64 / total_reviews as f64;
    let negative = members
        .iter()
        .filter(|&&m| reviews[m].sentiment < config.negative_sentiment_threshold)
        .count() as f64;
    let negative_fraction = negative / members.len() as f64;

    (config.urgency_size_weight * size_share
        + config.urgency_sentiment_weight * negative_fraction)
        .clamp(0.0, 1.0)
}
