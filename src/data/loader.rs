// ============================================================
// Layer 4 — CSV Table Loader / Writer
// ============================================================
// Reads a CSV file with a header row into a RecordTable and
// writes RecordTables back out as CSV.
//
// Every cell is kept as a string; the preprocessing steps only
// ever work with text and category labels.
//
// Example input:
//   review,sentiment
//   "Great film, loved it.",positive
//   "Too long.",negative
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use std::{collections::HashSet, fs::File, path::Path};

use crate::domain::{error::PreprocessError, record_table::RecordTable, traits::TableSource};

/// Loads a record table from a CSV file.
/// Implements the TableSource trait from Layer 3.
pub struct CsvTableLoader {
    /// Path to the CSV file
    path: String,
}

impl CsvTableLoader {
    /// Create a new CsvTableLoader pointed at a file
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSource for CsvTableLoader {
    fn load_table(&self) -> Result<RecordTable, PreprocessError> {
        let file = File::open(&self.path).map_err(|e| PreprocessError::io(&self.path, e))?;
        let mut reader = csv::Reader::from_reader(file);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        // RecordTable keys columns by name, a repeated header would overwrite data
        let mut seen = HashSet::new();
        if let Some(name) = headers.iter().find(|h| !seen.insert(h.as_str())) {
            return Err(PreprocessError::DuplicateColumn { name: name.clone() });
        }

        let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

        for record in reader.records() {
            let record = record?;
            for (column, cell) in columns.iter_mut().zip(record.iter()) {
                column.push(cell.to_string());
            }
        }

        let table = RecordTable::from_columns(headers.into_iter().zip(columns))?;

        tracing::info!(
            "Loaded {} rows x {} columns from '{}'",
            table.len(),
            table.column_names().len(),
            self.path
        );
        Ok(table)
    }
}

/// Write `table` to `path` as CSV with a header row.
pub fn write_csv(table: &RecordTable, path: impl AsRef<Path>) -> Result<(), PreprocessError> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(table.column_names())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush().map_err(|e| PreprocessError::io(path.display().to_string(), e))?;

    tracing::debug!("Wrote {} rows to '{}'", table.len(), path.display());
    Ok(())
}
