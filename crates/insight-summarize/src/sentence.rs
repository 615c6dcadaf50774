//! Sentence splitting with an abbreviation guard.

/// A verbatim sentence of one document.
///
/// Created once during splitting and never mutated. `index` preserves the
/// original position for order-preserving reassembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub index: usize,
}

/// Split text into sentences on `.` `!` `?` boundaries.
///
/// Internal whitespace runs are collapsed to single spaces first. A terminal
/// is a real boundary only when followed by whitespace and a non-lowercase
/// segment start, so "e.g. lowercase" stays in one sentence. Text without
/// terminal punctuation yields a single one-sentence result; empty input
/// yields an empty sequence.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = collapsed.chars().collect();
    let len = chars.len();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for i in 0..len {
        current.push(chars[i]);

        let is_terminal = matches!(chars[i], '.' | '!' | '?');
        if !is_terminal {
            continue;
        }

        // Boundary: end of text, or whitespace followed by a segment that
        // does not start with a lowercase letter (abbreviation guard).
        let at_end = i + 1 >= len;
        let real_boundary = at_end
            || (chars[i + 1].is_whitespace()
                && i + 2 < len
                && !chars[i + 2].is_lowercase());

        if real_boundary {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(Sentence {
                    text: trimmed.to_string(),
                    index: sentences.len(),
                });
            }
            current.clear();
        }
    }

    // Remaining text that didn't end with punctuation.
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(Sentence {
            text: trimmed.to_string(),
            index: sentences.len(),
        });
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_basic_sentences() {
        let sentences = split_sentences("Hello world. This is a test. Final sentence.");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].text, "Hello world.");
        assert_eq!(sentences[1].text, "This is a test.");
        assert_eq!(sentences[2].text, "Final sentence.");
        assert_eq!(sentences[2].index, 2);
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn no_terminal_punctuation_is_one_sentence() {
        let sentences = split_sentences("no ending punctuation here");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "no ending punctuation here");
    }

    #[test]
    fn abbreviation_does_not_split() {
        let sentences = split_sentences("The app (e.g. the beta build) crashes. Restart helps.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "The app (e.g. the beta build) crashes.");
    }

    #[test]
    fn collapses_whitespace_runs() {
        let sentences = split_sentences("First   sentence.  Second\n\nsentence here.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "First sentence.");
    }

    #[test]
    fn question_and_exclamation_terminate() {
        let sentences = split_sentences("Is this working? Yes it is! Great.");
        assert_eq!(sentences.len(), 3);
    }
}
