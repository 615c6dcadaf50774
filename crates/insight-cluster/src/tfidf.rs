//! TF-IDF vectorization of the review corpus.
//!
//! One L2-normalized row per review over a lexically sorted vocabulary of
//! unigrams and bigrams, with document-frequency pruning. The vectorizer is
//! call-local: fitted, consumed, and discarded within one clustering run.

use std::collections::{HashMap, HashSet};

use insight_core::{InsightError, InsightResult, VectorizerConfig};

/// Fitted TF-IDF vectorizer: vocabulary, idf weights, and the row matrix.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
    matrix: Vec<Vec<f64>>,
}

impl TfidfVectorizer {
    /// Fit on a tokenized corpus and materialize the row matrix.
    ///
    /// Terms are n-grams up to `ngram_max` joined with single spaces. Terms
    /// appearing in fewer than `min_df` documents or in more than `max_df`
    /// of the corpus are pruned; `max_features` keeps the highest-document-
    /// frequency survivors. The vocabulary is sorted lexically so identical
    /// input always produces identical column order.
    ///
    /// # Errors
    ///
    /// `Vectorization` when the corpus is empty or every term is pruned.
    pub fn fit(corpus: &[Vec<String>], config: &VectorizerConfig) -> InsightResult<Self> {
        if corpus.is_empty() {
            return Err(InsightError::Vectorization {
                reason: "empty corpus".to_string(),
            });
        }

        let n_docs = corpus.len();
        let grams: Vec<Vec<String>> = corpus
            .iter()
            .map(|tokens| ngrams(tokens, config.ngram_max))
            .collect();

        // Document frequency per term.
        let mut df: HashMap<&str, usize> = HashMap::new();
        for doc in &grams {
            let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let max_df_count = (config.max_df * n_docs as f64).floor() as usize;
        let mut kept: Vec<(&str, usize)> = df
            .iter()
            .filter(|(_, &count)| count >= config.min_df && count <= max_df_count)
            .map(|(&term, &count)| (term, count))
            .collect();

        if kept.is_empty() {
            return Err(InsightError::Vectorization {
                reason: format!(
                    "vocabulary empty after pruning (corpus of {n_docs} documents, \
                     min_df={}, max_df={})",
                    config.min_df, config.max_df
                ),
            });
        }

        // Keep the most widespread terms, then fix a lexical column order.
        kept.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        kept.truncate(config.max_features);
        let mut vocabulary: Vec<String> = kept.iter().map(|(t, _)| t.to_string()).collect();
        vocabulary.sort_unstable();

        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        // Smoothed idf.
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let doc_freq = df[term.as_str()] as f64;
                (n_docs as f64 / doc_freq).ln() + 1.0
            })
            .collect();

        // TF-IDF rows, L2-normalized.
        let matrix = grams
            .iter()
            .map(|doc| {
                let mut row = vec![0.0f64; vocabulary.len()];
                for term in doc {
                    if let Some(&i) = index.get(term.as_str()) {
                        row[i] += 1.0;
                    }
                }
                for (value, idf) in row.iter_mut().zip(&idf) {
                    *value *= idf;
                }
                let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
                if norm > f64::EPSILON {
                    for value in &mut row {
                        *value /= norm;
                    }
                }
                row
            })
            .collect();

        Ok(Self {
            vocabulary,
            idf,
            matrix,
        })
    }

    /// Lexically sorted vocabulary terms.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Inverse document frequency per vocabulary term.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// One L2-normalized row per corpus document.
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }
}

/// Expand tokens into n-grams of length 1..=ngram_max, space-joined.
fn ngrams(tokens: &[String], ngram_max: usize) -> Vec<String> {
    let mut out = Vec::new();
    for n in 1..=ngram_max.max(1) {
        if tokens.len() < n {
            break;
        }
        for window in tokens.windows(n) {
            out.push(window.join(" "));
        }
    }
    out
}
