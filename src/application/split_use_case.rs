// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Orchestrates the full dataset preparation pipeline in order:
//
//   Step 1: Load the CSV table         (Layer 4 - data)
//   Step 2: Clean the text column      (Layer 4 - data)
//   Step 3: Seed the RNG               (this layer)
//   Step 4: Binarise + split           (Layer 4 - data)
//   Step 5: Write train.csv / test.csv (Layer 4 - data)
//   Step 6: Save config for replay     (Layer 6 - infra)
//   Step 7: Append the split report    (Layer 6 - infra)
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::{
    loader::{write_csv, CsvTableLoader},
    preprocessor::{clean_text, CleanOptions},
    splitter::{split_data, SplitStrategy},
};
use crate::domain::{record_table::RecordTable, traits::TableSource};
use crate::infra::{
    config_store::ConfigStore,
    split_report::{ReportLogger, SplitReport},
};

// ─── Split Configuration ─────────────────────────────────────────────────────
// Everything needed to reproduce a split run.
// Serialisable so it can be saved next to the output and replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    pub input:        String,
    pub text_column:  String,
    pub label_column: String,
    pub output_dir:   String,
    pub options:      CleanOptions,
    pub percentile:   f64,
    pub strategy:     SplitStrategy,
    /// None → a random seed is drawn and recorded in the saved config
    pub seed:         Option<u64>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input:        "data/reviews.csv".to_string(),
            text_column:  "review".to_string(),
            label_column: "sentiment".to_string(),
            output_dir:   "splits".to_string(),
            options:      CleanOptions::default(),
            percentile:   80.0,
            strategy:     SplitStrategy::default(),
            seed:         None,
        }
    }
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Execute the pipeline end to end and return its summary
    pub fn execute(&self) -> Result<SplitReport> {
        let cfg = &self.config;

        // ── Step 1: Load the table ───────────────────────────────────────────
        let table = CsvTableLoader::new(&cfg.input)
            .load_table()
            .with_context(|| format!("Cannot load table '{}'", cfg.input))?;

        // ── Step 2: Clean the text column ────────────────────────────────────
        let cleaned = clean_text(&table, &cfg.text_column, cfg.options)
            .with_context(|| format!("Cannot clean column '{}'", cfg.text_column))?;
        let labels = cleaned
            .table
            .column(&cfg.label_column)
            .with_context(|| format!("Cannot read label column '{}'", cfg.label_column))?;

        // ── Step 3: Seed the RNG ─────────────────────────────────────────────
        // A drawn seed is recorded below so the run can be replayed
        let seed    = cfg.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);

        // ── Step 4: Binarise labels and split ────────────────────────────────
        let split = split_data(&cleaned.clean, labels, cfg.percentile, cfg.strategy, &mut rng)?;
        tracing::info!(
            "Split: {} train, {} test (seed {})",
            split.train_features.len(),
            split.test_features.len(),
            seed
        );

        // ── Step 5: Write the partitions ─────────────────────────────────────
        let out_dir = Path::new(&cfg.output_dir);
        let store   = ConfigStore::new(out_dir)?;

        write_partition(&split.train_features, &split.train_labels, &out_dir.join("train.csv"))?;
        write_partition(&split.test_features, &split.test_labels, &out_dir.join("test.csv"))?;

        // ── Step 6: Save the resolved config ─────────────────────────────────
        store.save(&SplitConfig { seed: Some(seed), ..cfg.clone() })?;

        // ── Step 7: Append the report ────────────────────────────────────────
        let report = SplitReport::from_split(&split, seed, cfg.strategy, cfg.percentile);
        let logger = ReportLogger::new(out_dir)?;
        logger.log(&report)?;
        tracing::info!("Split report appended to '{}'", logger.csv_path().display());

        Ok(report)
    }
}

/// Write one partition as a two-column (text, label) CSV
fn write_partition(features: &[String], labels: &[u8], path: &Path) -> Result<()> {
    let table = RecordTable::from_columns([
        ("text",  features.to_vec()),
        ("label", labels.iter().map(u8::to_string).collect()),
    ])?;

    write_csv(&table, path)
        .with_context(|| format!("Cannot write partition to '{}'", path.display()))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config_store::CONFIG_FILE;
    use std::fs;

    fn write_input(dir: &Path) -> String {
        let path = dir.join("reviews.csv");
        let mut csv = String::from("review,sentiment\n");
        for i in 0..20 {
            let label = if i % 2 == 0 { "positive" } else { "negative" };
            csv.push_str(&format!("\"Review number {i}, the best.\",{label}\n"));
        }
        fs::write(&path, csv).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn config(dir: &Path, seed: Option<u64>) -> SplitConfig {
        SplitConfig {
            input:      write_input(dir),
            output_dir: dir.join("splits").to_string_lossy().into_owned(),
            strategy:   SplitStrategy::Proportional,
            percentile: 75.0,
            seed,
            ..SplitConfig::default()
        }
    }

    #[test]
    fn test_split_writes_outputs() {
        let dir    = tempfile::tempdir().unwrap();
        let cfg    = config(dir.path(), Some(3));
        let report = SplitUseCase::new(cfg.clone()).execute().unwrap();

        assert_eq!(report.total, 20);
        assert_eq!(report.train, 15);
        assert_eq!(report.test, 5);

        let out = Path::new(&cfg.output_dir);
        let train = fs::read_to_string(out.join("train.csv")).unwrap();
        assert!(train.starts_with("text,label\n"));
        assert_eq!(train.lines().count(), 16);
        assert!(out.join("split_report.csv").exists());
    }

    #[test]
    fn test_drawn_seed_is_recorded_and_replayable() {
        let dir   = tempfile::tempdir().unwrap();
        let cfg   = config(dir.path(), None);
        let first = SplitUseCase::new(cfg.clone()).execute().unwrap();

        let saved = ConfigStore::load_from(Path::new(&cfg.output_dir).join(CONFIG_FILE)).unwrap();
        assert_eq!(saved.seed, Some(first.seed));

        let first_train = fs::read_to_string(Path::new(&cfg.output_dir).join("train.csv")).unwrap();
        let replay      = SplitUseCase::new(saved).execute().unwrap();
        let again_train = fs::read_to_string(Path::new(&cfg.output_dir).join("train.csv")).unwrap();

        assert_eq!(replay.seed, first.seed);
        assert_eq!(first_train, again_train);
    }

    #[test]
    fn test_missing_label_column() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = SplitConfig { label_column: "stars".into(), ..config(dir.path(), Some(1)) };
        let err = SplitUseCase::new(cfg).execute().unwrap_err();
        assert!(format!("{err:#}").contains("stars"));
    }
}
