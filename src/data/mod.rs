// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer does the actual text work, from raw CSV rows all
// the way to cleaned, split and segmented text.
//
// The two main flows:
//
//   CSV file                         raw text
//       │                                │
//       ▼                                ▼
//   CsvTableLoader  → RecordTable    SentenceTokenizer → sentences
//       │                                │
//       ▼                                ▼
//   clean_text      → clean column   ParagraphChunker  → paragraphs
//       │
//       ▼
//   split_data      → train / test   word_tokenize     → words
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads and writes record tables as CSV
pub mod loader;

/// Lowercasing, stopword, tag and punctuation stages
pub mod preprocessor;

/// Sentence and word tokenisers
pub mod tokenizer;

/// Groups sentences into paragraphs of a target length
pub mod chunker;

/// Splits features and labels into train/test partitions
pub mod splitter;
