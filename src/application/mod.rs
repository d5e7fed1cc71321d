// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// user-facing goal each.
//
// Rules for this layer:
//   - No text-processing logic here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination and error context
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Clean a text column of a CSV table
pub mod clean_use_case;

// Clean, binarise and split a labelled CSV table
pub mod split_use_case;

// Sentence, word and paragraph segmentation of raw text
pub mod segment_use_case;

// Load an embedding file and look up tokens
pub mod embed_use_case;
