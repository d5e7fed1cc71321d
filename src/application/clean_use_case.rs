// ============================================================
// Layer 2 — CleanUseCase
// ============================================================
// Loads a CSV table, cleans one text column and optionally
// writes the table (with its derived columns) back out.
//
//   Step 1: Load the CSV table      (Layer 4 - data)
//   Step 2: Run the cleaning stages (Layer 4 - data)
//   Step 3: Write the result        (Layer 4 - data)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::{write_csv, CsvTableLoader},
    preprocessor::{clean_text, CleanOptions, CleanedText},
};
use crate::domain::traits::TableSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanConfig {
    pub input:       String,
    pub text_column: String,
    /// Where to write the cleaned table; None keeps it in memory
    pub output:      Option<String>,
    pub options:     CleanOptions,
}

pub struct CleanUseCase {
    config: CleanConfig,
}

impl CleanUseCase {
    pub fn new(config: CleanConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<CleanedText> {
        let cfg = &self.config;

        let table = CsvTableLoader::new(&cfg.input)
            .load_table()
            .with_context(|| format!("Cannot load table '{}'", cfg.input))?;

        let cleaned = clean_text(&table, &cfg.text_column, cfg.options)
            .with_context(|| format!("Cannot clean column '{}'", cfg.text_column))?;

        tracing::info!(
            "Cleaned {} rows of '{}' (stopwords: {}, punctuation: {})",
            cleaned.clean.len(),
            cfg.text_column,
            cfg.options.remove_stopwords,
            cfg.options.remove_punctuation,
        );

        if let Some(output) = &cfg.output {
            write_csv(&cleaned.table, output)
                .with_context(|| format!("Cannot write cleaned table to '{output}'"))?;
            tracing::info!("Wrote cleaned table to '{}'", output);
        }

        Ok(cleaned)
    }
}
