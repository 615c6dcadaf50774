//! Silhouette score: partition quality in [-1, 1].
//!
//! Penalizes poor inter-cluster separation, which is what keeps the optimal-k
//! search from always picking the largest candidate k (inertia alone shrinks
//! monotonically with k).

use crate::kmeans::squared_distance;

/// Mean per-point silhouette over the partition.
///
/// `a` = mean distance to same-cluster points, `b` = smallest mean distance
/// to another cluster, `s = (b - a) / max(a, b)`. Singleton clusters score
/// their points 0. Returns 0.0 for degenerate partitions (k < 2 or k >= n).
pub fn silhouette_score(vectors: &[Vec<f64>], labels: &[usize], k: usize) -> f64 {
    let n = vectors.len();
    if k < 2 || n <= k {
        return 0.0;
    }

    let mut total = 0.0f64;
    for i in 0..n {
        let mut same_sum = 0.0f64;
        let mut same_count = 0usize;
        let mut other_sum = vec![0.0f64; k];
        let mut other_count = vec![0usize; k];

        for j in 0..n {
            if i == j {
                continue;
            }
            let dist = squared_distance(&vectors[i], &vectors[j]).sqrt();
            if labels[j] == labels[i] {
                same_sum += dist;
                same_count += 1;
            } else {
                other_sum[labels[j]] += dist;
                other_count[labels[j]] += 1;
            }
        }

        if same_count == 0 {
            // Singleton cluster: silhouette is defined as 0.
            continue;
        }

        let a = same_sum / same_count as f64;
        let b = (0..k)
            .filter(|&c| other_count[c] > 0)
            .map(|c| other_sum[c] / other_count[c] as f64)
            .fold(f64::INFINITY, f64::min);
        if !b.is_finite() {
            continue;
        }

        let denom = a.max(b);
        if denom > 0.0 {
            total += (b - a) / denom;
        }
    }

    total / n as f64
}
