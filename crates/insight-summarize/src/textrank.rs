//! Sentence ranking: PageRank on a cosine-similarity sentence graph, with a
//! term-frequency fallback for nearly disconnected graphs and a positional
//! boost for lead/tail sentences.

use std::collections::HashMap;

use insight_core::SummarizerConfig;
use tracing::debug;

use crate::sentence::Sentence;
use crate::similarity::cosine_similarity;
use crate::tokenize::normalize;

/// Rank sentences, returning one non-negative score per sentence.
///
/// Scores are comparable within one document only. The positional boost
/// encodes a deliberate prior: introductions and conclusions of reviews-style
/// prose are weighted up (`lead_boost`/`tail_boost`).
pub fn rank_sentences(sentences: &[Sentence], config: &SummarizerConfig) -> Vec<f64> {
    let n = sentences.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![1.0];
    }

    let tokenized: Vec<Vec<String>> = sentences.iter().map(|s| normalize(&s.text)).collect();
    let vectors = build_term_vectors(&tokenized);

    // Undirected similarity matrix; self-loops excluded, weights in [0, 1].
    let mut sim = vec![vec![0.0f64; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let s = cosine_similarity(&vectors[i], &vectors[j]).max(0.0);
            sim[i][j] = s;
            sim[j][i] = s;
        }
    }

    // A graph where fewer than 2 sentences connect to anything degenerates;
    // rank by raw term frequency instead.
    let connected = (0..n)
        .filter(|&i| (0..n).any(|j| sim[i][j] > 0.0))
        .count();
    let mut scores = if connected < 2 {
        debug!(sentences = n, "similarity graph degenerate, using TF fallback");
        frequency_scores(&tokenized)
    } else {
        pagerank(&sim, config)
    };

    apply_position_boost(&mut scores, config);
    scores
}

/// PageRank iteration over the weighted similarity matrix.
fn pagerank(sim: &[Vec<f64>], config: &SummarizerConfig) -> Vec<f64> {
    let n = sim.len();
    let mut scores = vec![1.0 / n as f64; n];

    for _ in 0..config.max_iterations {
        let mut new_scores = vec![0.0f64; n];
        let mut max_diff = 0.0f64;

        for i in 0..n {
            let mut sum = 0.0f64;
            for j in 0..n {
                if i == j {
                    continue;
                }
                let out_sum: f64 = (0..n).filter(|&k| k != j).map(|k| sim[j][k]).sum();
                if out_sum > f64::EPSILON {
                    sum += sim[j][i] * scores[j] / out_sum;
                }
            }
            new_scores[i] = (1.0 - config.damping) / n as f64 + config.damping * sum;
            max_diff = max_diff.max((new_scores[i] - scores[i]).abs());
        }

        scores = new_scores;
        if max_diff < config.convergence {
            break;
        }
    }

    scores
}

/// Fallback ranking: sum of global term frequencies, normalized by sentence
/// length. Usable even for very short documents.
fn frequency_scores(tokenized: &[Vec<String>]) -> Vec<f64> {
    let mut freq: HashMap<&str, f64> = HashMap::new();
    for tokens in tokenized {
        for token in tokens {
            *freq.entry(token.as_str()).or_insert(0.0) += 1.0;
        }
    }

    tokenized
        .iter()
        .map(|tokens| {
            if tokens.is_empty() {
                return 0.0;
            }
            let sum: f64 = tokens.iter().map(|t| freq[t.as_str()]).sum();
            sum / tokens.len() as f64
        })
        .collect()
}

/// Multiply scores for the first `lead_fraction` and last `tail_fraction` of
/// the document.
fn apply_position_boost(scores: &mut [f64], config: &SummarizerConfig) {
    let n = scores.len() as f64;
    for (i, score) in scores.iter_mut().enumerate() {
        let position = i as f64 / n;
        if position < config.lead_fraction {
            *score *= config.lead_boost;
        } else if position >= 1.0 - config.tail_fraction {
            *score *= config.tail_boost;
        }
    }
}

/// Build term-frequency vectors over a shared vocabulary.
fn build_term_vectors(tokenized: &[Vec<String>]) -> Vec<Vec<f64>> {
    let mut vocab: HashMap<&str, usize> = HashMap::new();
    for tokens in tokenized {
        for token in tokens {
            let next = vocab.len();
            vocab.entry(token.as_str()).or_insert(next);
        }
    }

    let dim = vocab.len();
    tokenized
        .iter()
        .map(|tokens| {
            let mut vec = vec![0.0f64; dim];
            for token in tokens {
                vec[vocab[token.as_str()]] += 1.0;
            }
            vec
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence::split_sentences;

    #[test]
    fn produces_one_score_per_sentence() {
        let sentences = split_sentences(
            "Rust is a systems language. It focuses on safety. \
             Memory safety is checked at compile time. The borrow checker prevents races.",
        );
        let scores = rank_sentences(&sentences, &SummarizerConfig::default());
        assert_eq!(scores.len(), 4);
        assert!(scores.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn single_sentence_scores_one() {
        let sentences = split_sentences("Only one sentence here.");
        let scores = rank_sentences(&sentences, &SummarizerConfig::default());
        assert_eq!(scores, vec![1.0]);
    }

    #[test]
    fn disconnected_graph_falls_back_to_frequency() {
        // No shared vocabulary between sentences: every similarity is zero.
        let sentences = split_sentences("Apples grow slowly. Trains depart quickly.");
        let scores = rank_sentences(&sentences, &SummarizerConfig::default());
        assert_eq!(scores.len(), 2);
        assert!(scores.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn lead_sentence_gets_boosted() {
        let cfg = SummarizerConfig::default();
        let mut boosted = vec![1.0; 10];
        apply_position_boost(&mut boosted, &cfg);
        assert!((boosted[0] - cfg.lead_boost).abs() < 1e-12);
        assert!((boosted[1] - cfg.lead_boost).abs() < 1e-12);
        assert!((boosted[5] - 1.0).abs() < 1e-12);
        assert!((boosted[8] - cfg.tail_boost).abs() < 1e-12);
        assert!((boosted[9] - cfg.tail_boost).abs() < 1e-12);
    }

    #[test]
    fn ranking_is_deterministic() {
        let sentences = split_sentences(
            "The app crashes often. Crashes happen on launch. Support never answers. \
             The design is nice though. Crashes ruin everything.",
        );
        let cfg = SummarizerConfig::default();
        let a = rank_sentences(&sentences, &cfg);
        let b = rank_sentences(&sentences, &cfg);
        assert_eq!(a, b);
    }
}
