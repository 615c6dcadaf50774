//! Token normalization shared by ranking and the TF fallback.

/// Normalize text into lowercase letter-only tokens.
///
/// Unicode-aware: retains letters only, drops tokens shorter than 2 chars and
/// stop words. Deterministic and side-effect free.
pub fn normalize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphabetic())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| w.chars().count() >= 2 && !is_stop_word(w))
        .collect()
}

fn is_stop_word(word: &str) -> bool {
    matches!(
        word,
        "the"
            | "and"
            | "for"
            | "are"
            | "but"
            | "not"
            | "you"
            | "all"
            | "can"
            | "had"
            | "her"
            | "was"
            | "one"
            | "our"
            | "out"
            | "has"
            | "have"
            | "been"
            | "from"
            | "this"
            | "that"
            | "with"
            | "they"
            | "will"
            | "each"
            | "which"
            | "their"
            | "said"
            | "what"
            | "its"
            | "into"
            | "more"
            | "other"
    )
}
