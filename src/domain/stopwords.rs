// ============================================================
// Layer 3 — Stopword Set
// ============================================================
// Common English words that carry little signal for text
// classification ("the", "and", "i'm", ...).
//
// The list is fixed at compile time and turned into a HashSet
// the first time it is used. Matching is exact and
// case-sensitive, so text must be lowercased first.
//
// Reference: https://gist.github.com/sebleier/554280
//            once_cell crate documentation

use once_cell::sync::Lazy;
use std::collections::HashSet;

const STOPWORD_LIST: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "it", "it's", "its", "itself", "let's", "me", "more",
    "most", "my", "myself", "nor", "of", "on", "once", "only", "or", "other", "ought", "our",
    "ours", "ourselves", "out", "over", "own", "same", "she", "she'd", "she'll", "she's",
    "should", "so", "some", "such", "than", "that", "that's", "the", "their", "theirs", "them",
    "themselves", "then", "there", "there's", "these", "they", "they'd", "they'll", "they're",
    "they've", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was",
    "we", "we'd", "we'll", "we're", "we've", "were", "what", "what's", "when", "when's", "where",
    "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "would", "you",
    "you'd", "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

static STOPWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOPWORD_LIST.iter().copied().collect());

/// True if `word` is in the stopword set (exact match)
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Number of distinct stopwords
pub fn count() -> usize {
    STOPWORDS.len()
}
