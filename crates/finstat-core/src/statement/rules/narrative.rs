//! Narrative sentence splitting for report output.

use super::patterns::SENTENCE_BOUNDARY;

/// Split recognized text into sentences at terminal punctuation followed
/// by whitespace. Sentences are trimmed; empty fragments are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // Keep the punctuation mark with its sentence.
        let end = boundary.start() + 1;
        push_sentence(&mut sentences, &text[start..end]);
        start = boundary.end();
    }
    push_sentence(&mut sentences, &text[start..]);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_on_terminal_punctuation() {
        let text = "The company traded well. Results improved! Will it last? Time will tell.";
        assert_eq!(
            split_sentences(text),
            vec![
                "The company traded well.",
                "Results improved!",
                "Will it last?",
                "Time will tell.",
            ]
        );
    }

    #[test]
    fn test_newlines_count_as_whitespace() {
        let text = "First sentence.\nSecond sentence.";
        assert_eq!(
            split_sentences(text),
            vec!["First sentence.", "Second sentence."]
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n  ").is_empty());
    }

    #[test]
    fn test_unterminated_tail_is_kept() {
        assert_eq!(
            split_sentences("Complete sentence. Trailing fragment"),
            vec!["Complete sentence.", "Trailing fragment"]
        );
    }
}
