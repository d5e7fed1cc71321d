// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Partitions parallel features and labels into a training set
// and a testing set. Labels are binarised on the way
// ("positive" → 1, everything else → 0).
//
// Two strategies:
//
//   SamplePercentile (default)
//     Draw one uniform random number per row, compute the
//     `percentile`-th percentile of those same draws, and put
//     every row whose draw is strictly below it in training.
//     Because the threshold comes from the sample itself the
//     training share is close to, but not exactly, percentile%.
//     With percentile = 100 the row holding the largest draw
//     still lands in the test set.
//
//   Proportional
//     Pick exactly round(n * percentile / 100) rows uniformly at
//     random for training; the rest go to testing.
//
// Both strategies keep rows in their original order inside each
// partition and never drop or duplicate a row.
//
// The RNG is passed in, so callers decide whether a split is
// reproducible (seeded StdRng) or not (thread_rng).
//
// Reference: Rust Book §8 (Vectors), §10 (Generics)
//            rand crate documentation

use rand::{seq::index, Rng};
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::PreprocessError,
    split::{binarize_label, SplitDataset},
};

/// How rows are assigned to the training partition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitStrategy {
    #[default]
    SamplePercentile,
    Proportional,
}

/// Split `features`/`labels` into train and test partitions.
///
/// # Arguments
/// * `features`   - One feature value per row
/// * `labels`     - One category label per row
/// * `percentile` - Training share in 0..=100
/// * `strategy`   - How rows are assigned (see module docs)
/// * `rng`        - Random source for the assignment
pub fn split_data<T, L, R>(
    features:   &[T],
    labels:     &[L],
    percentile: f64,
    strategy:   SplitStrategy,
    rng:        &mut R,
) -> Result<SplitDataset<T>, PreprocessError>
where
    T: Clone,
    L: AsRef<str>,
    R: Rng,
{
    if features.len() != labels.len() {
        return Err(PreprocessError::LengthMismatch {
            features: features.len(),
            labels:   labels.len(),
        });
    }
    if !(0.0..=100.0).contains(&percentile) {
        return Err(PreprocessError::InvalidPercentile(percentile));
    }

    let binary: Vec<u8> = labels.iter().map(|l| binarize_label(l.as_ref())).collect();
    let total = features.len();

    let (in_train, threshold) = match strategy {
        SplitStrategy::SamplePercentile => sample_percentile_mask(total, percentile, rng),
        SplitStrategy::Proportional     => (proportional_mask(total, percentile, rng), None),
    };

    let mut split = SplitDataset {
        train_features: Vec::new(),
        train_labels:   Vec::new(),
        test_features:  Vec::new(),
        test_labels:    Vec::new(),
        threshold,
    };

    for ((feature, label), train) in features.iter().zip(binary).zip(in_train) {
        if train {
            split.train_features.push(feature.clone());
            split.train_labels.push(label);
        } else {
            split.test_features.push(feature.clone());
            split.test_labels.push(label);
        }
    }

    tracing::debug!(
        "Dataset split: {} training, {} testing ({:?}, percentile {})",
        split.train_features.len(),
        split.test_features.len(),
        strategy,
        percentile,
    );

    Ok(split)
}

/// Boolean mask from thresholding random draws at their own percentile
fn sample_percentile_mask<R: Rng>(
    total:      usize,
    percentile: f64,
    rng:        &mut R,
) -> (Vec<bool>, Option<f64>) {
    if total == 0 {
        return (Vec::new(), None);
    }

    let draws: Vec<f64> = (0..total).map(|_| rng.gen::<f64>()).collect();
    let threshold       = percentile_of(&draws, percentile);

    (draws.iter().map(|&d| d < threshold).collect(), Some(threshold))
}

/// Boolean mask with exactly round(total * percentile / 100) true entries
fn proportional_mask<R: Rng>(total: usize, percentile: f64, rng: &mut R) -> Vec<bool> {
    let train_size = ((total as f64) * percentile / 100.0).round() as usize;
    let train_size = train_size.min(total);

    let mut mask = vec![false; total];
    for i in index::sample(rng, total, train_size) {
        mask[i] = true;
    }
    mask
}

/// Percentile with linear interpolation between closest ranks.
///
/// For sorted values v and h = (n - 1) * p / 100 the result is
/// v[floor(h)] + (h - floor(h)) * (v[floor(h) + 1] - v[floor(h)]).
/// `values` must not be empty.
pub fn percentile_of(values: &[f64], percentile: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank  = (sorted.len() - 1) as f64 * percentile / 100.0;
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let frac  = rank - lower as f64;

    sorted[lower] + frac * (sorted[upper] - sorted[lower])
}
