//! Property tests for the extractive summarizer.

use proptest::prelude::*;

use insight_summarize::{split_sentences, summarize_default};

const WORDS: &[&str] = &[
    "crash", "launch", "battery", "design", "support", "update", "screen", "menu", "search",
    "slow", "fast", "love", "hate", "broken", "works",
];

/// Build a document of `n` short sentences from the word pool.
fn document(seed: u64, n: usize) -> String {
    let mut sentences = Vec::with_capacity(n);
    let mut state = seed.wrapping_add(1);
    for i in 0..n {
        let mut words = Vec::new();
        for j in 0..3 {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let w = WORDS[(state >> 33) as usize % WORDS.len()];
            // Capitalize the first word so the splitter sees real boundaries.
            if j == 0 {
                let mut c = w.chars();
                words.push(match c.next() {
                    Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
                    None => String::new(),
                });
            } else {
                words.push(w.to_string());
            }
        }
        // Positional marker keeps every sentence textually unique.
        words.push(format!("entry{i}"));
        sentences.push(format!("{}.", words.join(" ")));
    }
    sentences.join(" ")
}

proptest! {
    #[test]
    fn prop_summary_sentences_are_verbatim_and_ordered(
        seed in 0u64..500,
        n in 3usize..12,
        target in 1usize..6,
    ) {
        let text = document(seed, n);
        let summary = summarize_default(&text, target).unwrap();
        let source: Vec<String> = split_sentences(&text).into_iter().map(|s| s.text).collect();
        let picked: Vec<String> = split_sentences(&summary).into_iter().map(|s| s.text).collect();

        let mut last = None;
        for sentence in &picked {
            let idx = source.iter().position(|s| s == sentence);
            prop_assert!(idx.is_some(), "sentence not verbatim: {}", sentence);
            if let Some(prev) = last {
                prop_assert!(idx.unwrap() > prev, "order not preserved");
            }
            last = idx;
        }
    }

    #[test]
    fn prop_target_bounds_summary_length(
        seed in 0u64..500,
        n in 1usize..12,
        target in 1usize..12,
    ) {
        let text = document(seed, n);
        let summary = summarize_default(&text, target).unwrap();
        if target >= n {
            prop_assert_eq!(summary, text);
        } else {
            prop_assert_eq!(split_sentences(&summary).len(), target);
        }
    }

    #[test]
    fn prop_deterministic(seed in 0u64..500, n in 2usize..10) {
        let text = document(seed, n);
        let target = 1 + n / 2;
        prop_assert_eq!(
            summarize_default(&text, target).unwrap(),
            summarize_default(&text, target).unwrap()
        );
    }
}
