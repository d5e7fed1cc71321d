// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, traits and errors that define what the
// preprocessing system works with.
//
// Rules for this layer:
//   - NO file I/O
//   - NO CLI types
//   - NO randomness (the splitter in Layer 4 owns that)
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A column-oriented table of text records
pub mod record_table;

// Train/test partitions and label binarisation
pub mod split;

// The fixed English stopword set
pub mod stopwords;

// Core abstractions (traits) that other layers implement
pub mod traits;

// Error type shared by the domain, data and infra layers
pub mod error;
