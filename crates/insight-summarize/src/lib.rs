//! # insight-summarize
//!
//! Extractive summarizer: sentence splitting → cosine-similarity graph →
//! PageRank-style ranking → positional boost → order-preserving selection.
//! Pure and call-local; safe to run from many threads with no coordination.

pub mod selector;
pub mod sentence;
pub mod similarity;
pub mod textrank;
pub mod tokenize;

use insight_core::{InsightError, InsightResult, SummarizerConfig};
use tracing::debug;

pub use sentence::{split_sentences, Sentence};

/// Summarize a document down to `target_sentence_count` sentences.
///
/// The summary is purely extractive: every returned sentence is a verbatim
/// sentence of the source, and sentences appear in source order. Documents
/// with at most `target_sentence_count` sentences are returned unchanged.
///
/// # Errors
///
/// `InvalidParameter` when `target_sentence_count` is zero.
pub fn summarize(
    document_text: &str,
    target_sentence_count: usize,
    config: &SummarizerConfig,
) -> InsightResult<String> {
    if target_sentence_count < 1 {
        return Err(InsightError::invalid_parameter(
            "target_sentence_count",
            target_sentence_count,
            "must be >= 1",
        ));
    }

    let sentences = split_sentences(document_text);
    if sentences.is_empty() {
        return Ok(String::new());
    }
    if target_sentence_count >= sentences.len() {
        // Already short enough: no truncation, return the document unchanged.
        return Ok(document_text.to_string());
    }

    let scores = textrank::rank_sentences(&sentences, config);
    debug!(
        sentences = sentences.len(),
        target = target_sentence_count,
        "ranked sentences"
    );
    Ok(selector::select_summary(&sentences, &scores, target_sentence_count))
}

/// `summarize` with the default configuration.
pub fn summarize_default(
    document_text: &str,
    target_sentence_count: usize,
) -> InsightResult<String> {
    summarize(document_text, target_sentence_count, &SummarizerConfig::default())
}
