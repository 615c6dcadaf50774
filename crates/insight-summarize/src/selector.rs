//! Sentence selection: highest-scoring sentences, reassembled in source order.

use crate::sentence::Sentence;

/// Select the `target_count` highest-scoring sentences and join them in
/// original document order. Ties break toward the earlier position. The
/// summary must read in source order, never in score order.
pub fn select_summary(sentences: &[Sentence], scores: &[f64], target_count: usize) -> String {
    let mut indexed: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    let mut selected: Vec<usize> = indexed.iter().take(target_count).map(|(i, _)| *i).collect();
    selected.sort_unstable();

    selected
        .iter()
        .map(|&i| sentences[i].text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
