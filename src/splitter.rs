//! Seeded train/test partitioning.
//!
//! The partition is a random permutation followed by a deterministic cut:
//! the same table, ratio, and seed yield a byte-identical pair of files on
//! every run. No stratification.

use crate::error::{ErrorKind, Result};
use crate::feature_store::write_table;
use crate::table::FeatureTable;
use rand::prelude::*;
use std::path::Path;

/// Partition `table` into `(train, test)` by `ratio`.
///
/// Row indices are shuffled with an RNG seeded from `seed`, then cut after
/// `ceil(ratio * n)` test rows; the remainder is the training set. Rows
/// appear in permutation order. The two subsets are disjoint and together
/// cover the input exactly.
#[must_use]
pub fn split_train_test(
    table: &FeatureTable,
    ratio: f64,
    seed: u64,
) -> (FeatureTable, FeatureTable) {
    let n = table.len();
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_len = ((ratio * n as f64).ceil() as usize).min(n);
    let (test_idx, train_idx) = indices.split_at(test_len);

    (table.select(train_idx), table.select(test_idx))
}

/// Split `table` and write both subsets as CSV with header rows.
///
/// Parent directories are created as needed; existing files are replaced.
/// The output is the side effect of the two files existing.
///
/// # Errors
/// Failures while writing either file are wrapped with the split kind and
/// propagated; nothing is retried.
pub fn export_train_test(
    table: &FeatureTable,
    ratio: f64,
    seed: u64,
    training_path: impl AsRef<Path>,
    testing_path: impl AsRef<Path>,
) -> Result<()> {
    let (train, test) = split_train_test(table, ratio, seed);
    tracing::info!(
        train_rows = train.len(),
        test_rows = test.len(),
        "performed train-test split"
    );

    write_table(&train, training_path.as_ref(), ErrorKind::Split)?;
    write_table(&test, testing_path.as_ref(), ErrorKind::Split)?;
    tracing::info!(
        training_path = %training_path.as_ref().display(),
        testing_path = %testing_path.as_ref().display(),
        "train and test files saved"
    );
    Ok(())
}
