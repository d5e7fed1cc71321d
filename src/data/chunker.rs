// ============================================================
// Layer 4 — Paragraph Chunker
// ============================================================
// Splits long text (a speech, a review, an article) into
// paragraphs of roughly `para_len` words each.
//
// How it works:
//   1. Count the words (whitespace split)
//   2. Number of paragraphs = ceil(words / para_len)
//   3. Split the text into sentences
//   4. Spread the sentences over the paragraphs as evenly as
//      possible — the first (sentences % paragraphs) paragraphs
//      get one extra sentence
//
// Example with 7 sentences and 3 paragraphs:
//   k = 7 / 3 = 2, m = 7 % 3 = 1
//   Paragraph 1: sentences 0..3   (k + 1)
//   Paragraph 2: sentences 3..5   (k)
//   Paragraph 3: sentences 5..7   (k)
//
// Sentences never cross a paragraph boundary, so paragraph
// word counts are only approximately para_len.
//
// Reference: Rust Book §8 (Slices)

use crate::data::tokenizer::SentenceTokenizer;
use crate::domain::error::PreprocessError;

pub struct ParagraphChunker {
    /// Target number of words per paragraph
    para_len: usize,
    /// Sentence splitter used to find paragraph boundaries
    sentences: SentenceTokenizer,
}

impl ParagraphChunker {
    /// Create a new ParagraphChunker.
    ///
    /// Fails if para_len is 0, because the paragraph count
    /// would be a division by zero.
    pub fn new(para_len: usize, sentences: SentenceTokenizer) -> Result<Self, PreprocessError> {
        if para_len == 0 {
            return Err(PreprocessError::ZeroParagraphLength);
        }
        Ok(Self { para_len, sentences })
    }

    /// Split text into paragraphs of joined sentences.
    pub fn chunk(&self, text: &str) -> Result<Vec<String>, PreprocessError> {
        let word_count = text.split_whitespace().count();
        let paragraphs = self.num_paragraphs(word_count);

        // Empty document → nothing to chunk
        if paragraphs == 0 {
            return Ok(Vec::new());
        }

        let sentences = self.sentences.tokenize(text)?;
        let (k, m)    = (sentences.len() / paragraphs, sentences.len() % paragraphs);

        let chunks: Vec<String> = (0..paragraphs)
            .map(|i| {
                let start = i * k + i.min(m);
                let end   = (i + 1) * k + (i + 1).min(m);
                sentences[start..end].join(" ")
            })
            .collect();

        tracing::debug!(
            "Chunked {} words / {} sentences into {} paragraphs",
            word_count,
            sentences.len(),
            chunks.len()
        );

        Ok(chunks)
    }

    /// Returns how many paragraphs a text of `word_count` words produces
    pub fn num_paragraphs(&self, word_count: usize) -> usize {
        word_count.div_ceil(self.para_len)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn chunker(para_len: usize) -> ParagraphChunker {
        ParagraphChunker::new(para_len, SentenceTokenizer::default()).unwrap()
    }

    #[test]
    fn test_even_distribution() {
        // 6 sentences, 12 words, 4 words per paragraph → 3 paragraphs of 2
        let text  = "One two. Three four. Five six. Seven eight. Nine ten. Eleven twelve.";
        let paras = chunker(4).chunk(text).unwrap();
        assert_eq!(paras, vec![
            "One two Three four",
            "Five six Seven eight",
            "Nine ten Eleven twelve",
        ]);
    }

    #[test]
    fn test_remainder_goes_to_earliest_paragraphs() {
        // 7 sentences, 14 words, para_len 5 → 3 paragraphs: 3, 2, 2
        let text = "A b. C d. E f. G h. I j. K l. M n.";
        let paras = chunker(5).chunk(text).unwrap();
        let counts: Vec<usize> = paras
            .iter()
            .map(|p| p.split_whitespace().count() / 2)
            .collect();
        assert_eq!(counts, vec![3, 2, 2]);
    }

    #[test]
    fn test_sentence_counts_differ_by_at_most_one() {
        let text: String = (0..23).map(|i| format!("Word{i} here. ")).collect();
        let paras = chunker(7).chunk(&text).unwrap();
        let counts: Vec<usize> = paras
            .iter()
            .map(|p| p.split_whitespace().count() / 2)
            .collect();
        let max = counts.iter().max().unwrap();
        let min = counts.iter().min().unwrap();
        assert!(max - min <= 1);
        assert_eq!(counts.iter().sum::<usize>(), 23);
    }

    #[test]
    fn test_short_text_gives_one_paragraph() {
        let paras = chunker(100).chunk("Just a few words. Nothing more.").unwrap();
        assert_eq!(paras, vec!["Just a few words Nothing more"]);
    }

    #[test]
    fn test_empty_text_gives_no_paragraphs() {
        assert!(chunker(5).chunk("   ").unwrap().is_empty());
    }

    #[test]
    fn test_num_paragraphs_rounds_up() {
        let c = chunker(10);
        assert_eq!(c.num_paragraphs(0), 0);
        assert_eq!(c.num_paragraphs(10), 1);
        assert_eq!(c.num_paragraphs(11), 2);
    }

    #[test]
    fn test_zero_length_rejected() {
        let err = ParagraphChunker::new(0, SentenceTokenizer::default()).err().unwrap();
        assert!(matches!(err, PreprocessError::ZeroParagraphLength));
    }
}
