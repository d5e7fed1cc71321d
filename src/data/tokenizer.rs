// ============================================================
// Layer 4 — Sentence and Word Tokenisers
// ============================================================
// Two lightweight, rule-based tokenisers.
//
// Sentence tokeniser:
//   Splits after '.' or '?' followed by a whitespace character,
//   unless the period ends an abbreviation-like pattern:
//     - "e.g. " / "i.e. "  → (?<!\w\.\w.)   no split
//     - "Mr. " / "Dr. "    → (?<![A-Z][a-z]\.) no split
//   Each sentence then has every non-word, non-space character
//   removed ("Hello, world." → "Hello world").
//
//   The final segment after the last boundary is usually an
//   empty leftover (text ending in ". " or ".\n"). TrailingSegment
//   decides whether to always drop it or only when it is blank.
//
// Word tokeniser:
//   Splits on runs of whitespace and - . , ; ! ? and drops
//   empty pieces and anything containing a backslash.
//
// Rust's regex crate has no lookbehind, so the sentence pattern
// uses fancy-regex.
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)
//            fancy-regex crate documentation

use fancy_regex::Regex as FancyRegex;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::PreprocessError;

static SENTENCE_BOUNDARY: Lazy<FancyRegex> = Lazy::new(|| {
    FancyRegex::new(r"(?<!\w\.\w.)(?<![A-Z][a-z]\.)(?<=[.?])\s")
        .expect("sentence boundary pattern is valid")
});

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("non-word pattern is valid"));

static WORD_DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-\s.,;!?]+").expect("word delimiter pattern is valid"));

/// Pieces that are only delimiters are dropped by the word tokeniser.
const DELIMITER_CHARS: &str = "- \t\n.,;!?\\";

/// What to do with the segment after the last sentence boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailingSegment {
    /// Always discard it, even if it holds a real sentence
    Always,
    /// Discard it only when it is empty or whitespace
    #[default]
    WhenBlank,
}

/// Splits text into punctuation-free sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceTokenizer {
    trailing: TrailingSegment,
}

impl SentenceTokenizer {
    pub fn new(trailing: TrailingSegment) -> Self {
        Self { trailing }
    }

    /// Split `text` into sentences with punctuation removed.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>, PreprocessError> {
        let mut segments = Vec::new();
        let mut start    = 0usize;

        for boundary in SENTENCE_BOUNDARY.find_iter(text) {
            let boundary = boundary?;
            segments.push(&text[start..boundary.start()]);
            start = boundary.end();
        }
        segments.push(&text[start..]);

        let drop_last = match self.trailing {
            TrailingSegment::Always    => true,
            TrailingSegment::WhenBlank => segments.last().is_some_and(|s| s.trim().is_empty()),
        };
        if drop_last {
            segments.pop();
        }

        Ok(segments
            .into_iter()
            .map(|s| NON_WORD.replace_all(s, "").into_owned())
            .collect())
    }
}

/// Split `text` into words on whitespace and - . , ; ! ?
pub fn word_tokenize(text: &str) -> Vec<String> {
    WORD_DELIMITERS
        .split(text)
        .filter(|piece| !DELIMITER_CHARS.contains(piece) && !piece.contains('\\'))
        .map(str::to_string)
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenize_basic() {
        assert_eq!(word_tokenize("hello, world!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_word_tokenize_hyphens_and_runs() {
        assert_eq!(
            word_tokenize("well-known;  facts...  right?"),
            vec!["well", "known", "facts", "right"]
        );
    }

    #[test]
    fn test_word_tokenize_drops_backslash_tokens() {
        assert_eq!(word_tokenize(r"keep \n this"), vec!["keep", "this"]);
    }

    #[test]
    fn test_word_tokenize_empty() {
        assert!(word_tokenize("").is_empty());
        assert!(word_tokenize(" - , . ").is_empty());
    }

    #[test]
    fn test_sentences_strip_punctuation() {
        let t = SentenceTokenizer::default();
        let s = t.tokenize("Hello, world. How are you? ").unwrap();
        assert_eq!(s, vec!["Hello world", "How are you"]);
    }

    #[test]
    fn test_when_blank_keeps_final_sentence() {
        let t = SentenceTokenizer::new(TrailingSegment::WhenBlank);
        let s = t.tokenize("First one. Second one.").unwrap();
        assert_eq!(s, vec!["First one", "Second one"]);
    }

    #[test]
    fn test_always_drops_final_segment() {
        let t = SentenceTokenizer::new(TrailingSegment::Always);
        let s = t.tokenize("First one. Second one.").unwrap();
        assert_eq!(s, vec!["First one"]);
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let t = SentenceTokenizer::default();
        let s = t.tokenize("Ask Mr. Smith about e.g. this. Done. ").unwrap();
        assert_eq!(s, vec!["Ask Mr Smith about eg this", "Done"]);
    }

    #[test]
    fn test_exclamation_is_not_a_boundary() {
        let t = SentenceTokenizer::default();
        let s = t.tokenize("Wow! Really. ").unwrap();
        assert_eq!(s, vec!["Wow Really"]);
    }

    #[test]
    fn test_empty_text() {
        let t = SentenceTokenizer::default();
        assert!(t.tokenize("").unwrap().is_empty());
    }
}
