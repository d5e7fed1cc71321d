// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// the application layer can swap implementations without
// changing the code that uses them:
//   - CsvTableLoader implements TableSource
//   - Lowercase, StopwordFilter, TagStripper and
//     PunctuationStripper implement TextStage
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Trait Objects)

use crate::domain::{error::PreprocessError, record_table::RecordTable};

// ─── TableSource ──────────────────────────────────────────────────────────────
/// Any component that can produce a record table.
///
/// Implementations:
///   - CsvTableLoader → reads a CSV file with a header row
pub trait TableSource {
    /// Load the full table from this source
    fn load_table(&self) -> Result<RecordTable, PreprocessError>;
}

// ─── TextStage ────────────────────────────────────────────────────────────────
/// One step of the cleaning pipeline.
///
/// A stage maps a single text value to a new value. Stages are
/// independent of each other: each one consumes a complete column
/// and produces a complete column, so any subset can be chained.
pub trait TextStage {
    /// Short name used in log messages
    fn name(&self) -> &'static str;

    /// Transform one text value
    fn apply(&self, text: &str) -> String;

    /// Transform every value of a column, preserving row order
    fn apply_column(&self, column: &[String]) -> Vec<String> {
        column.iter().map(|text| self.apply(text)).collect()
    }
}
