// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Additive-combinatorial summaries of binary matrices.
//!
//! [`PatternStats`] is the summary handed to the exclusion predictor; its
//! field names are part of that interface.

use ndarray::{s, Array2, ArrayBase, Axis, Data, Ix2};
use serde::{Deserialize, Serialize};

/// Coarse counts over a binary matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternStats {
    /// Sum of all entries.
    pub total_ones: u64,
    /// Rows with no set entry.
    pub all_zero_rows: usize,
    /// Rows with every entry set.
    pub all_one_rows: usize,
}

/// GF(2) differences between consecutive rows.
///
/// Row `i` of the result is `matrix[i + 1] XOR matrix[i]`. With one row or
/// none the result is `(0, ncols)`.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use presence_lattice::combinatorics::compute_event_differences;
///
/// let diffs = compute_event_differences(&array![[1u8, 0, 1], [1, 1, 0]]);
/// assert_eq!(diffs, array![[0u8, 1, 1]]);
/// ```
pub fn compute_event_differences<S>(matrix: &ArrayBase<S, Ix2>) -> Array2<u8>
where
    S: Data<Elem = u8>,
{
    let (nrows, ncols) = matrix.dim();
    if nrows <= 1 {
        return Array2::zeros((0, ncols));
    }

    let later = matrix.slice(s![1.., ..]);
    let earlier = matrix.slice(s![..-1, ..]);
    let mut diffs = later.to_owned();
    diffs.zip_mut_with(&earlier, |d, &e| *d ^= e);
    diffs
}

/// Count set entries and uniform rows.
///
/// A matrix with zero columns has every row both all-zero and all-one.
pub fn basic_pattern_counts<S>(matrix: &ArrayBase<S, Ix2>) -> PatternStats
where
    S: Data<Elem = u8>,
{
    let total_ones = matrix.iter().map(|&v| u64::from(v)).sum();
    let mut stats = PatternStats {
        total_ones,
        ..PatternStats::default()
    };

    for row in matrix.axis_iter(Axis(0)) {
        if row.iter().all(|&v| v == 0) {
            stats.all_zero_rows += 1;
        }
        if row.iter().all(|&v| v == 1) {
            stats.all_one_rows += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_differences_shape() {
        let m = array![[1u8, 0], [0, 0], [0, 1]];
        let diffs = compute_event_differences(&m);
        assert_eq!(diffs, array![[1u8, 0], [0, 1]]);
    }

    #[test]
    fn test_differences_single_row() {
        let m = array![[1u8, 0, 1]];
        assert_eq!(compute_event_differences(&m).dim(), (0, 3));
        assert_eq!(compute_event_differences(&Array2::<u8>::zeros((0, 5))).dim(), (0, 5));
    }

    #[test]
    fn test_identical_rows_have_zero_difference() {
        let m = array![[1u8, 1, 0], [1, 1, 0]];
        assert_eq!(compute_event_differences(&m), Array2::<u8>::zeros((1, 3)));
    }

    #[test]
    fn test_counts() {
        let m = array![[0u8, 0, 0], [1, 1, 1], [1, 0, 1], [0, 0, 0]];
        assert_eq!(
            basic_pattern_counts(&m),
            PatternStats {
                total_ones: 5,
                all_zero_rows: 2,
                all_one_rows: 1,
            }
        );
    }

    #[test]
    fn test_counts_empty() {
        assert_eq!(
            basic_pattern_counts(&Array2::<u8>::zeros((0, 39))),
            PatternStats::default()
        );
    }

    #[test]
    fn test_counts_zero_width() {
        let stats = basic_pattern_counts(&Array2::<u8>::zeros((3, 0)));
        assert_eq!(stats.all_zero_rows, 3);
        assert_eq!(stats.all_one_rows, 3);
        assert_eq!(stats.total_ones, 0);
    }

    #[test]
    fn test_field_names_are_stable() {
        let json = serde_json::to_value(PatternStats::default()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["all_one_rows", "all_zero_rows", "total_ones"]);
    }
}
