// ============================================================
// Layer 6 — Embedding Store
// ============================================================
// Loads pretrained word vectors (GloVe text format) into memory.
//
// File format, one token per line:
//   the 0.418 0.24968 -0.41242 0.1217 ...
//   cat 0.45281 -0.50108 -0.53714 ...
//
//   - first whitespace-separated field → the token
//   - every remaining field            → one f64 component
//
// Loading rules:
//   - blank lines are skipped
//   - a repeated token keeps its LAST vector
//   - any unparsable component fails the whole load, naming
//     the 1-based line number; nothing partial is returned
//   - vectors of a different length than the first one are
//     kept but logged as a warning
//
// The file is read through a BufReader, so even very large
// embedding files are streamed line by line.
//
// Reference: Pennington et al. (2014) GloVe
//            Rust Book §12 (Reading a File)

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use crate::domain::error::PreprocessError;

/// Token → vector lookup table, read-only once loaded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbeddingTable {
    vectors:   HashMap<String, Vec<f64>>,
    /// Vector length of the first loaded line
    dimension: Option<usize>,
}

impl EmbeddingTable {
    /// Vector for `token`, if present
    pub fn get(&self, token: &str) -> Option<&[f64]> {
        self.vectors.get(token).map(Vec::as_slice)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.vectors.contains_key(token)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Length of the vectors, taken from the first loaded line.
    /// None for an empty table.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }
}

/// Reads an embedding file from disk
pub struct EmbeddingStore {
    path: PathBuf,
}

impl EmbeddingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the whole file into an EmbeddingTable
    pub fn load(&self) -> Result<EmbeddingTable, PreprocessError> {
        let source_name = self.path.display().to_string();
        tracing::info!("Loading embeddings from '{}'", source_name);

        let file  = File::open(&self.path).map_err(|e| PreprocessError::io(&source_name, e))?;
        let table = read_embeddings(BufReader::new(file), &source_name)?;

        tracing::info!("{} words loaded", table.len());
        Ok(table)
    }
}

/// Parse embedding lines from any buffered reader.
/// `source` is only used in error and log messages.
pub fn read_embeddings<R: BufRead>(reader: R, source: &str) -> Result<EmbeddingTable, PreprocessError> {
    let mut vectors: HashMap<String, Vec<f64>> = HashMap::new();
    let mut expected_dim: Option<usize> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line    = line.map_err(|e| PreprocessError::io(source, e))?;

        let mut fields = line.split_whitespace();
        let Some(token) = fields.next() else {
            continue;
        };

        let vector = fields
            .map(|value| {
                value.parse::<f64>().map_err(|err| PreprocessError::Parse {
                    line:   line_no,
                    value:  value.to_string(),
                    source: err,
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        match expected_dim {
            None => expected_dim = Some(vector.len()),
            Some(dim) if dim != vector.len() => tracing::warn!(
                "'{}' line {}: '{}' has {} components, expected {}",
                source,
                line_no,
                token,
                vector.len(),
                dim
            ),
            Some(_) => {}
        }

        if vectors.insert(token.to_string(), vector).is_some() {
            tracing::debug!("'{}' line {}: '{}' repeated, keeping the later vector", source, line_no, token);
        }
    }

    Ok(EmbeddingTable { vectors, dimension: expected_dim })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, io::Cursor};

    fn parse(text: &str) -> Result<EmbeddingTable, PreprocessError> {
        read_embeddings(Cursor::new(text), "test")
    }

    #[test]
    fn test_single_entry() {
        let table = parse("cat 0.1 0.2 0.3\n").unwrap();
        assert_eq!(table.get("cat"), Some(&[0.1, 0.2, 0.3][..]));
        assert_eq!(table.dimension(), Some(3));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let table = parse("cat 1 2\ndog 3 4\ncat 5 6\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("cat"), Some(&[5.0, 6.0][..]));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = parse("\ncat 1\n   \ndog 2").unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.contains("dog"));
    }

    #[test]
    fn test_parse_error_names_line() {
        let err = parse("cat 0.1 0.2\ndog 0.3 abc\n").unwrap_err();
        match err {
            PreprocessError::Parse { line, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("glove.txt");
        fs::write(&path, "the 0.5 -0.5\ncat 0.1 0.2\n").unwrap();

        let table = EmbeddingStore::new(&path).load().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("the"), Some(&[0.5, -0.5][..]));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EmbeddingStore::new("/no/such/glove.txt").load().unwrap_err();
        assert!(matches!(err, PreprocessError::Io { .. }));
    }

    #[test]
    fn test_dimension_comes_from_first_line() {
        // later rows of other lengths only warn, the first line decides
        let table = parse("cat 1 2 3\ndog 4 5\nowl 6\nbat 7 8 9 10\n").unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.dimension(), Some(3));
    }

    #[test]
    fn test_empty_table() {
        let table = parse("").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.dimension(), None);
    }
}
