// ============================================================
// Layer 3 — SplitDataset Domain Type
// ============================================================
// The result of partitioning a labelled dataset:
//   - Training partition: features + binary labels
//   - Testing partition:  features + binary labels
//
// Labels arrive as category strings ("positive", "negative", ...)
// and are binarised before splitting:
//   "positive" → 1
//   anything else → 0
//
// The comparison is exact: "Positive" or " positive" map to 0.
//
// Reference: Rust Book §5 (Structs), §10 (Generics)

use serde::{Deserialize, Serialize};

/// The label string that maps to class 1
pub const POSITIVE_LABEL: &str = "positive";

/// Map a category label to 0/1
pub fn binarize_label(label: &str) -> u8 {
    u8::from(label == POSITIVE_LABEL)
}

/// Disjoint train/test partitions of parallel features and labels.
/// Both partitions keep the original row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitDataset<T> {
    pub train_features: Vec<T>,
    pub train_labels:   Vec<u8>,
    pub test_features:  Vec<T>,
    pub test_labels:    Vec<u8>,

    /// Draw threshold used by a percentile-of-sample split.
    /// None for proportional splits and empty inputs.
    pub threshold: Option<f64>,
}

impl<T> SplitDataset<T> {
    /// Total rows across both partitions
    pub fn len(&self) -> usize {
        self.train_features.len() + self.test_features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rows labelled 1 in the training partition
    pub fn train_positives(&self) -> usize {
        self.train_labels.iter().filter(|&&l| l == 1).count()
    }

    /// Number of rows labelled 1 in the testing partition
    pub fn test_positives(&self) -> usize {
        self.test_labels.iter().filter(|&&l| l == 1).count()
    }
}
