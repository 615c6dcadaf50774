//! K-means partitioning with k-means++ seeding.
//!
//! Each candidate k runs `n_init` independent initializations and keeps the
//! lowest-inertia fit. Initialization draws the first centroid uniformly from
//! the seeded RNG, then extends greedily to the point farthest from the
//! chosen set, so a fixed seed always reproduces the same partition.

use insight_core::ClusteringConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One converged k-means run.
#[derive(Debug, Clone)]
pub struct KMeansFit {
    /// Cluster label per input row, in `0..k`.
    pub labels: Vec<usize>,
    /// One centroid per cluster.
    pub centroids: Vec<Vec<f64>>,
    /// Sum of squared distances of rows to their centroid.
    pub inertia: f64,
}

/// Fit k-means on the row vectors.
///
/// Callers must guarantee `1 <= k <=` number of distinct rows; the pipeline
/// clamps k before calling. Deterministic for a fixed `config.seed`.
pub fn fit(vectors: &[Vec<f64>], k: usize, config: &ClusteringConfig) -> KMeansFit {
    debug_assert!(k >= 1 && k <= vectors.len());

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut best = lloyd(vectors, k, config, &mut rng);
    for run in 1..config.n_init.max(1) as u64 {
        let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(run));
        let candidate = lloyd(vectors, k, config, &mut rng);
        if candidate.inertia < best.inertia {
            best = candidate;
        }
    }
    best
}

/// One initialization + Lloyd iteration.
fn lloyd(
    vectors: &[Vec<f64>],
    k: usize,
    config: &ClusteringConfig,
    rng: &mut StdRng,
) -> KMeansFit {
    let n = vectors.len();
    let mut centroids = init_centroids(vectors, k, rng);
    let mut labels = vec![0usize; n];

    for _ in 0..config.max_iterations {
        // Assignment step: nearest centroid, ties toward the lower index.
        for (i, row) in vectors.iter().enumerate() {
            labels[i] = nearest(row, &centroids).0;
        }

        // Update step.
        let mut sums = vec![vec![0.0f64; centroids[0].len()]; k];
        let mut counts = vec![0usize; k];
        for (row, &label) in vectors.iter().zip(&labels) {
            counts[label] += 1;
            for (s, v) in sums[label].iter_mut().zip(row) {
                *s += v;
            }
        }

        let mut max_shift = 0.0f64;
        let mut reseeded = false;
        for c in 0..k {
            if counts[c] == 0 {
                // Reseed an empty cluster to the row farthest from its
                // current centroid so no emitted cluster is ever empty.
                let farthest = (0..n)
                    .max_by(|&a, &b| {
                        let da = squared_distance(&vectors[a], &centroids[labels[a]]);
                        let db = squared_distance(&vectors[b], &centroids[labels[b]]);
                        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
                    })
                    .unwrap_or(0);
                centroids[c] = vectors[farthest].clone();
                labels[farthest] = c;
                reseeded = true;
                continue;
            }
            let new_centroid: Vec<f64> = sums[c].iter().map(|s| s / counts[c] as f64).collect();
            max_shift = max_shift.max(squared_distance(&new_centroid, &centroids[c]).sqrt());
            centroids[c] = new_centroid;
        }

        if !reseeded && max_shift < config.convergence {
            break;
        }
    }

    // Final assignment and inertia.
    let mut inertia = 0.0f64;
    for (i, row) in vectors.iter().enumerate() {
        let (label, dist) = nearest(row, &centroids);
        labels[i] = label;
        inertia += dist;
    }

    KMeansFit {
        labels,
        centroids,
        inertia,
    }
}

/// k-means++ seeding: uniform first centroid, then repeatedly the row
/// farthest from the chosen set.
fn init_centroids(vectors: &[Vec<f64>], k: usize, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let n = vectors.len();
    let mut chosen: Vec<usize> = vec![rng.gen_range(0..n)];

    while chosen.len() < k {
        let next = (0..n)
            .map(|i| {
                let d = chosen
                    .iter()
                    .map(|&c| squared_distance(&vectors[i], &vectors[c]))
                    .fold(f64::INFINITY, f64::min);
                (i, d)
            })
            .max_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    // Lower index wins exact ties for reproducibility.
                    .then(b.0.cmp(&a.0))
            })
            .map(|(i, _)| i)
            .unwrap_or(0);
        chosen.push(next);
    }

    chosen.into_iter().map(|i| vectors[i].clone()).collect()
}

/// Index and squared distance of the nearest centroid.
fn nearest(row: &[f64], centroids: &[Vec<f64>]) -> (usize, f64) {
    let mut best = (0usize, f64::INFINITY);
    for (c, centroid) in centroids.iter().enumerate() {
        let d = squared_distance(row, centroid);
        if d < best.1 {
            best = (c, d);
        }
    }
    best
}

pub(crate) fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}
