// ============================================================
// Layer 4 — Text Cleaning Pipeline
// ============================================================
// Cleans the free-text column of a record table before it is
// fed to a classifier.
//
// Stages (applied in order, each one optional except the first):
//   1. Lowercase            → "Great <br/>Film!" → "great <br/>film!"
//   2. Stopword filter      → drops "the", "and", "i'm", ...
//   3. Tag stripper         → removes '>' and any '<' run before it
//   4. Punctuation stripper → every ASCII punctuation char → ' '
//
// Stages 2 and 3 run together when stopword removal is on.
// Stage 4 runs on whatever the previous stage produced, so it
// works whether or not stopwords were removed.
//
// Columns added to the returned table (for a column "review"):
//   review                     → replaced by its lowercase form
//   "review without stopwords" → output of stage 2 (if enabled)
//   "clean_review"             → final cleaned text
//
// Reference: Rust Book §8 (Strings), §17 (Trait Objects)
//            regex crate documentation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::PreprocessError,
    record_table::RecordTable,
    stopwords,
    traits::TextStage,
};

/// Zero or more '<' followed by a '>'
static TAG_FRAGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new("<*>").expect("tag fragment pattern is valid"));

/// Which optional stages to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOptions {
    pub remove_stopwords:   bool,
    pub remove_punctuation: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            remove_stopwords:   true,
            remove_punctuation: true,
        }
    }
}

/// Output of `clean_text`: the derived table plus the cleaned column
#[derive(Debug, Clone)]
pub struct CleanedText {
    pub table: RecordTable,
    pub clean: Vec<String>,
}

// ─── Stages ───────────────────────────────────────────────────────────────────

pub struct Lowercase;

impl TextStage for Lowercase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    fn apply(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

pub struct StopwordFilter;

impl TextStage for StopwordFilter {
    fn name(&self) -> &'static str {
        "stopwords"
    }

    fn apply(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !stopwords::is_stopword(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct TagStripper;

impl TextStage for TagStripper {
    fn name(&self) -> &'static str {
        "tags"
    }

    fn apply(&self, text: &str) -> String {
        TAG_FRAGMENT.replace_all(text, "").into_owned()
    }
}

pub struct PunctuationStripper;

impl TextStage for PunctuationStripper {
    fn name(&self) -> &'static str {
        "punctuation"
    }

    fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
            .collect()
    }
}

// ─── Pipeline ─────────────────────────────────────────────────────────────────

/// Clean `text_column` of `table` without modifying `table`.
pub fn clean_text(
    table:       &RecordTable,
    text_column: &str,
    options:     CleanOptions,
) -> Result<CleanedText, PreprocessError> {
    let raw = table.column(text_column)?;

    // ── Stage 1: lowercase, replacing the source column ──────────────────────
    let mut current = Lowercase.apply_column(raw);
    let mut table   = table.with_column(text_column, current.clone())?;

    // ── Stages 2 + 3: stopwords, then tag fragments ──────────────────────────
    if options.remove_stopwords {
        current = StopwordFilter.apply_column(&current);
        table   = table.with_column(format!("{text_column} without stopwords"), current.clone())?;
        current = TagStripper.apply_column(&current);
        tracing::debug!(
            "Removed {} known stopwords and tags from '{}'",
            stopwords::count(),
            text_column
        );
    }

    // ── Stage 4: punctuation ─────────────────────────────────────────────────
    if options.remove_punctuation {
        current = PunctuationStripper.apply_column(&current);
        tracing::debug!("Removed punctuation from '{}'", text_column);
    }

    let table = table.with_column(format!("clean_{text_column}"), current.clone())?;

    Ok(CleanedText { table, clean: current })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn table(texts: &[&str]) -> RecordTable {
        RecordTable::from_columns([(
            "review",
            texts.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        )])
        .unwrap()
    }

    #[test]
    fn test_full_clean() {
        let t   = table(&["This movie was GREAT!<br /><br />Loved it."]);
        let out = clean_text(&t, "review", CleanOptions::default()).unwrap();
        // "this" and "was" are dropped ("it." keeps its period so it
        // survives), the tag pass drops each '>', punctuation → spaces
        assert_eq!(out.clean[0].split_whitespace().collect::<Vec<_>>(),
                   vec!["movie", "great", "br", "br", "loved", "it"]);
    }

    #[test]
    fn test_row_count_preserved() {
        let t   = table(&["a b c", "", "the and of", "Hello, world."]);
        let out = clean_text(&t, "review", CleanOptions::default()).unwrap();
        assert_eq!(out.clean.len(), 4);
        assert_eq!(out.clean[2], "");
    }

    #[test]
    fn test_non_stopwords_pass_through_unchanged() {
        let t   = table(&["quick brown fox jumps"]);
        let out = clean_text(&t, "review", CleanOptions::default()).unwrap();
        assert_eq!(out.clean[0], "quick brown fox jumps");
    }

    #[test]
    fn test_punctuation_without_stopword_removal() {
        let t = table(&["The end. Really!"]);
        let options = CleanOptions { remove_stopwords: false, remove_punctuation: true };
        let out = clean_text(&t, "review", options).unwrap();
        assert_eq!(out.clean[0], "the end  really ");
        assert!(!out.table.has_column("review without stopwords"));
    }

    #[test]
    fn test_no_stages_only_lowercases() {
        let t = table(&["The END."]);
        let options = CleanOptions { remove_stopwords: false, remove_punctuation: false };
        let out = clean_text(&t, "review", options).unwrap();
        assert_eq!(out.clean[0], "the end.");
    }

    #[test]
    fn test_derived_columns_and_original_untouched() {
        let t   = table(&["The Cat"]);
        let out = clean_text(&t, "review", CleanOptions::default()).unwrap();

        assert_eq!(t.column("review").unwrap(), &["The Cat"]);
        assert_eq!(out.table.column("review").unwrap(), &["the cat"]);
        assert_eq!(out.table.column("review without stopwords").unwrap(), &["cat"]);
        assert_eq!(out.table.column("clean_review").unwrap(), &["cat"]);
    }

    #[test]
    fn test_missing_column() {
        let err = clean_text(&table(&["x"]), "text", CleanOptions::default()).unwrap_err();
        assert!(matches!(err, PreprocessError::MissingColumn { .. }));
    }

    #[test]
    fn test_tag_stripper_pattern() {
        assert_eq!(TagStripper.apply("a<<>b>c"), "abc");
        assert_eq!(TagStripper.apply("no tags"), "no tags");
    }
}
