// ============================================================
// Layer 2 — SegmentUseCase
// ============================================================
// Sentence, word and paragraph segmentation of a single text.
// Thin wrappers that add error context around Layer 4.

use anyhow::{Context, Result};

use crate::data::{
    chunker::ParagraphChunker,
    tokenizer::{word_tokenize, SentenceTokenizer, TrailingSegment},
};

pub struct SegmentUseCase {
    sentences: SentenceTokenizer,
}

impl SegmentUseCase {
    pub fn new(trailing: TrailingSegment) -> Self {
        Self { sentences: SentenceTokenizer::new(trailing) }
    }

    pub fn sentences(&self, text: &str) -> Result<Vec<String>> {
        let sentences = self
            .sentences
            .tokenize(text)
            .context("Sentence tokenisation failed")?;
        tracing::info!("Found {} sentences", sentences.len());
        Ok(sentences)
    }

    pub fn words(&self, text: &str) -> Vec<String> {
        let words = word_tokenize(text);
        tracing::info!("Found {} words", words.len());
        words
    }

    pub fn paragraphs(&self, text: &str, para_len: usize) -> Result<Vec<String>> {
        let chunker = ParagraphChunker::new(para_len, self.sentences)
            .context("Invalid paragraph length")?;
        let paragraphs = chunker
            .chunk(text)
            .context("Paragraph chunking failed")?;
        tracing::info!("Built {} paragraphs of ~{} words", paragraphs.len(), para_len);
        Ok(paragraphs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_reject_zero_length() {
        let uc = SegmentUseCase::new(TrailingSegment::WhenBlank);
        assert!(uc.paragraphs("Some text.", 0).is_err());
    }

    #[test]
    fn test_trailing_policy_is_applied() {
        let text = "One. Two.";
        assert_eq!(SegmentUseCase::new(TrailingSegment::WhenBlank).sentences(text).unwrap().len(), 2);
        assert_eq!(SegmentUseCase::new(TrailingSegment::Always).sentences(text).unwrap().len(), 1);
    }
}
