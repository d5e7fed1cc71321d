// ============================================================
// Layer 3 — RecordTable Domain Type
// ============================================================
// A small column-oriented table: named columns of strings,
// all with the same number of rows.
//
// Tables are never mutated once built. Adding a derived column
// (e.g. "clean_review") returns a NEW table, so a caller's data
// is never changed behind its back.
//
// Example:
//   review               | sentiment
//   ---------------------+----------
//   "Great film!"        | positive
//   "Dull and too long." | negative
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §8 (Vectors)

use serde::{Deserialize, Serialize};

use crate::domain::error::PreprocessError;

/// One named column of string values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name:   String,
    pub values: Vec<String>,
}

/// An ordered collection of equally long columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordTable {
    columns: Vec<Column>,
    rows:    usize,
}

impl RecordTable {
    /// Create an empty table with no columns and no rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (name, values) pairs.
    /// Every column must have the same length as the first one.
    pub fn from_columns<N, I>(columns: I) -> Result<Self, PreprocessError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<String>)>,
    {
        columns
            .into_iter()
            .try_fold(Self::new(), |table, (name, values)| table.with_column(name, values))
    }

    /// Number of rows in every column
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Look up a column's values by name
    pub fn column(&self, name: &str) -> Result<&[String], PreprocessError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| PreprocessError::MissingColumn {
                name:      name.to_string(),
                available: self.column_names().join(", "),
            })
    }

    /// Return a copy of this table with `name` set to `values`.
    ///
    /// An existing column with the same name is replaced in place
    /// (keeping its position); otherwise the column is appended.
    /// The first column of an empty table fixes the row count.
    pub fn with_column(
        &self,
        name:   impl Into<String>,
        values: Vec<String>,
    ) -> Result<Self, PreprocessError> {
        let name = name.into();

        if !self.columns.is_empty() && values.len() != self.rows {
            return Err(PreprocessError::ColumnLength {
                name,
                expected: self.rows,
                actual:   values.len(),
            });
        }

        let mut next = self.clone();
        next.rows = values.len();

        match next.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.values = values,
            None           => next.columns.push(Column { name, values }),
        }

        Ok(next)
    }

    /// Iterate over rows as vectors of cell references, in column order
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.rows).map(move |i| {
            self.columns.iter().map(|c| c.values[i].as_str()).collect()
        })
    }
}
