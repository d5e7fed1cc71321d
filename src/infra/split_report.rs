// ============================================================
// Layer 6 — Split Report Logger
// ============================================================
// Appends one row per split run to a CSV file, so repeated
// runs into the same output directory leave a history.
//
// Columns:
//   - seed:           RNG seed used for the run
//   - strategy:       sample-percentile or proportional
//   - percentile:     requested training share (0-100)
//   - total:          rows in the input table
//   - train / test:   rows in each partition
//   - train_positive: rows labelled 1 in training
//   - test_positive:  rows labelled 1 in testing
//   - threshold:      draw threshold (empty for proportional)
//
// Example CSV output:
//   seed,strategy,percentile,total,train,test,train_positive,test_positive,threshold
//   42,sample-percentile,80.0,1000,800,200,402,97,0.7912451
//
// Reference: Rust Book §12 (I/O and File Handling)
//            csv crate documentation (Writer::serialize)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io,
    path::PathBuf,
};

use crate::data::splitter::SplitStrategy;
use crate::domain::split::SplitDataset;

/// Field names, in the order `SplitReport` serialises them
const HEADER: [&str; 9] = [
    "seed", "strategy", "percentile", "total", "train", "test",
    "train_positive", "test_positive", "threshold",
];

/// Summary of one split run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitReport {
    pub seed:           u64,
    pub strategy:       SplitStrategy,
    pub percentile:     f64,
    pub total:          usize,
    pub train:          usize,
    pub test:           usize,
    pub train_positive: usize,
    pub test_positive:  usize,
    pub threshold:      Option<f64>,
}

impl SplitReport {
    /// Summarise a finished split
    pub fn from_split<T>(
        split:      &SplitDataset<T>,
        seed:       u64,
        strategy:   SplitStrategy,
        percentile: f64,
    ) -> Self {
        Self {
            seed,
            strategy,
            percentile,
            total:          split.len(),
            train:          split.train_features.len(),
            test:           split.test_features.len(),
            train_positive: split.train_positives(),
            test_positive:  split.test_positives(),
            threshold:      split.threshold,
        }
    }

    /// Share of rows that ended up in training, 0.0 for an empty split
    pub fn train_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.train as f64 / self.total as f64
        }
    }

    /// Serialise as one header-less CSV record.
    /// The strategy uses its kebab-case name; a missing threshold is an empty field.
    fn write_row<W: io::Write>(&self, out: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
        writer.serialize(self)?;
        writer.flush()?;
        Ok(())
    }
}

/// Logs split reports to `split_report.csv` in a directory
pub struct ReportLogger {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl ReportLogger {
    /// Create a new ReportLogger.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("split_report.csv");

        // Header only for a new file so runs accumulate
        if !csv_path.exists() {
            let mut writer = csv::Writer::from_path(&csv_path)?;
            writer.write_record(HEADER)?;
            writer.flush()?;
            tracing::debug!("Created split report: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one report as a new row
    pub fn log(&self, report: &SplitReport) -> Result<()> {
        let f = OpenOptions::new().append(true).open(&self.csv_path)?;
        report.write_row(f)?;

        tracing::debug!(
            "Logged split: {} train / {} test (seed {})",
            report.train,
            report.test,
            report.seed,
        );
        Ok(())
    }

    /// Return the path to the report CSV file
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn report(threshold: Option<f64>) -> SplitReport {
        SplitReport {
            seed:           42,
            strategy:       SplitStrategy::SamplePercentile,
            percentile:     80.0,
            total:          10,
            train:          8,
            test:           2,
            train_positive: 5,
            test_positive:  1,
            threshold,
        }
    }

    fn row(report: &SplitReport) -> String {
        let mut buf = Vec::new();
        report.write_row(&mut buf).unwrap();
        String::from_utf8(buf).unwrap().trim_end().to_string()
    }

    #[test]
    fn test_row_format() {
        assert_eq!(row(&report(Some(0.5))), "42,sample-percentile,80.0,10,8,2,5,1,0.5");
        assert_eq!(row(&report(None)), "42,sample-percentile,80.0,10,8,2,5,1,");

        let proportional = SplitReport { strategy: SplitStrategy::Proportional, ..report(None) };
        assert!(row(&proportional).starts_with("42,proportional,"));
    }

    #[test]
    fn test_header_matches_field_order() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(report(None)).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(out.lines().next().unwrap(), HEADER.join(","));
    }

    #[test]
    fn test_train_fraction() {
        assert!((report(None).train_fraction() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_rows_accumulate() {
        let dir    = tempfile::tempdir().unwrap();
        let logger = ReportLogger::new(dir.path()).unwrap();
        logger.log(&report(None)).unwrap();

        // A second logger on the same directory must not rewrite the header
        let again = ReportLogger::new(dir.path()).unwrap();
        again.log(&report(Some(0.25))).unwrap();

        let content = fs::read_to_string(logger.csv_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER.join(","));

        // Rows read back into reports
        let mut reader = csv::Reader::from_path(logger.csv_path()).unwrap();
        let back: Vec<SplitReport> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(back, vec![report(None), report(Some(0.25))]);
    }
}
