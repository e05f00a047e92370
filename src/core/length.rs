//! Word and string length measurement.
//!
//! Lengths are counted in grapheme clusters, not bytes or code units, so an
//! emoji or accented character counts as one, matching what a reader sees.

use unicode_segmentation::UnicodeSegmentation;

/// Length of a single word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLength {
    /// The word itself
    pub word: String,
    /// Grapheme count
    pub length: usize,
}

/// Measurement of a whole string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Per-word lengths, in input order
    pub words: Vec<WordLength>,
    /// Sum of all word lengths (whitespace excluded)
    pub total: usize,
}

/// Measures every whitespace-separated word of `text`.
#[must_use]
pub fn measure(text: &str) -> Measurement {
    let words: Vec<WordLength> = text
        .split_whitespace()
        .map(|word| WordLength {
            word: word.to_string(),
            length: word.graphemes(true).count(),
        })
        .collect();
    let total = words.iter().map(|w| w.length).sum();

    Measurement { words, total }
}

impl Measurement {
    /// One line per word plus a combined total when there is more than one.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines: Vec<String> = self
            .words
            .iter()
            .map(|w| {
                let plural = if w.length == 1 { "" } else { "s" };
                format!("{} contains {} character{plural}.", w.word, w.length)
            })
            .collect();

        if self.words.len() > 1 {
            lines.push(format!(
                "The combined length of those strings is {} characters.",
                self.total
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        let m = measure("hello");
        assert_eq!(m.total, 5);
        assert_eq!(m.report(), "hello contains 5 characters.");
    }

    #[test]
    fn test_multiple_words_with_total() {
        let m = measure("one two");
        assert_eq!(m.words.len(), 2);
        assert_eq!(m.total, 6);
        assert!(m.report().contains("combined length of those strings is 6"));
    }

    #[test]
    fn test_singular_character() {
        let m = measure("a");
        assert_eq!(m.report(), "a contains 1 character.");
    }

    #[test]
    fn test_graphemes_not_code_points() {
        // One family emoji is one perceived character
        let m = measure("👩‍👩‍👧‍👦");
        assert_eq!(m.total, 1);
    }

    #[test]
    fn test_whitespace_collapses() {
        let m = measure("  spaced \t out  ");
        assert_eq!(m.words.len(), 2);
        assert_eq!(m.total, 9);
    }

    #[test]
    fn test_empty_input() {
        let m = measure("");
        assert!(m.words.is_empty());
        assert_eq!(m.total, 0);
        assert!(m.report().is_empty());
    }
}
