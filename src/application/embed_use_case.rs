// ============================================================
// Layer 2 — EmbedUseCase
// ============================================================
// Loads an embedding file and optionally looks up one token.

use anyhow::{Context, Result};

use crate::infra::embedding_store::{EmbeddingStore, EmbeddingTable};

/// What the `embeddings` command reports back
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingSummary {
    pub words:     usize,
    pub dimension: Option<usize>,
    /// Whether the requested token is in the table (false if none asked)
    pub found:     bool,
    /// Vector of the requested token, None if absent or not asked
    pub vector:    Option<Vec<f64>>,
}

pub struct EmbedUseCase {
    path: String,
}

impl EmbedUseCase {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Load the full embedding table
    pub fn load(&self) -> Result<EmbeddingTable> {
        EmbeddingStore::new(&self.path)
            .load()
            .with_context(|| format!("Cannot load embeddings from '{}'", self.path))
    }

    pub fn summarize(&self, word: Option<&str>) -> Result<EmbeddingSummary> {
        let table = self.load()?;
        let found = word.is_some_and(|w| table.contains(w));

        if let (Some(w), false) = (word, found) {
            tracing::warn!("'{}' is not in the embedding table", w);
        }

        Ok(EmbeddingSummary {
            words:     table.len(),
            dimension: table.dimension(),
            found,
            vector:    word.and_then(|w| table.get(w)).map(<[f64]>::to_vec),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_summary_with_lookup() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.txt");
        fs::write(&path, "cat 0.1 0.2 0.3\ndog 0.4 0.5 0.6\n").unwrap();

        let uc = EmbedUseCase::new(path.to_string_lossy());
        let summary = uc.summarize(Some("cat")).unwrap();
        assert_eq!(summary.words, 2);
        assert_eq!(summary.dimension, Some(3));
        assert!(summary.found);
        assert_eq!(summary.vector, Some(vec![0.1, 0.2, 0.3]));

        let missing = uc.summarize(Some("bird")).unwrap();
        assert!(!missing.found);
        assert_eq!(missing.vector, None);
    }

    #[test]
    fn test_summary_without_word_reports_not_found() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.txt");
        fs::write(&path, "cat 0.1 0.2
").unwrap();

        let summary = EmbedUseCase::new(path.to_string_lossy()).summarize(None).unwrap();
        assert_eq!(summary.words, 1);
        assert!(!summary.found);
        assert_eq!(summary.vector, None);
    }

    #[test]
    fn test_parse_failure_has_context() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "cat 0.1 oops\n").unwrap();

        let err = EmbedUseCase::new(path.to_string_lossy()).summarize(None).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Cannot load embeddings"));
        assert!(msg.contains("oops"));
    }
}
