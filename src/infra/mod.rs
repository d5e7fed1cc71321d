// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the concerns that touch the file system but aren't
// part of the text pipeline itself:
//
//   embedding_store.rs — Pretrained word vectors
//                        Streams a GloVe-format text file into
//                        an in-memory token → vector table.
//
//   config_store.rs    — Split configuration persistence
//                        Saves the exact SplitConfig (including
//                        the RNG seed) as JSON so a split can be
//                        replayed.
//
//   split_report.rs    — Split run history
//                        Appends partition sizes and label
//                        counts to a CSV file after each run.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// GloVe-style embedding file loading
pub mod embedding_store;

/// SplitConfig JSON saving and loading
pub mod config_store;

/// Split report CSV logger
pub mod split_report;
