// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Frequency histogram of row patterns.

use crate::error::Result;
use crate::lattice::PatternKey;
use ndarray::{ArrayBase, Data, Ix2};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// Occurrence count of every distinct row pattern.
///
/// Keys iterate in ascending lexicographic order, independent of the order
/// rows were seen in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternHistogram(BTreeMap<PatternKey, usize>);

impl PatternHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `key`.
    pub fn record(&mut self, key: PatternKey) {
        *self.0.entry(key).or_insert(0) += 1;
    }

    /// Occurrences of `key` (0 when never seen).
    pub fn count(&self, key: &PatternKey) -> usize {
        self.0.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct patterns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts; equals the number of rows histogrammed.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PatternKey, usize> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a PatternHistogram {
    type Item = (&'a PatternKey, &'a usize);
    type IntoIter = btree_map::Iter<'a, PatternKey, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<PatternKey> for PatternHistogram {
    fn from_iter<I: IntoIterator<Item = PatternKey>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for key in iter {
            histogram.record(key);
        }
        histogram
    }
}

/// Count the rows of a binary matrix by pattern.
///
/// # Errors
///
/// [`CanonError::Domain`](crate::error::CanonError::Domain) if a row holds a
/// non-binary entry.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use presence_lattice::lattice::{build_pattern_histogram, PatternKey};
///
/// let m = array![[1u8, 0], [1, 0], [0, 1]];
/// let histogram = build_pattern_histogram(&m).unwrap();
///
/// assert_eq!(histogram.len(), 2);
/// assert_eq!(histogram.total(), 3);
/// ```
pub fn build_pattern_histogram<S>(matrix: &ArrayBase<S, Ix2>) -> Result<PatternHistogram>
where
    S: Data<Elem = u8>,
{
    matrix.rows().into_iter().map(PatternKey::from_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CanonError;
    use ndarray::{array, s, Array2};

    fn key(bits: &str) -> PatternKey {
        let row: Vec<u8> = bits.bytes().map(|b| b - b'0').collect();
        PatternKey::from_row(ndarray::Array1::from(row)).unwrap()
    }

    #[test]
    fn test_counts() {
        let m = array![[1u8, 1, 0], [0, 0, 1], [1, 1, 0]];
        let histogram = build_pattern_histogram(&m).unwrap();

        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram.count(&key("110")), 2);
        assert_eq!(histogram.count(&key("001")), 1);
        assert_eq!(histogram.count(&key("111")), 0);
    }

    #[test]
    fn test_row_order_irrelevant() {
        let m = array![[1u8, 0], [0, 1], [0, 1], [1, 1]];
        let reversed = m.slice(s![..;-1, ..]);
        assert_eq!(
            build_pattern_histogram(&m).unwrap(),
            build_pattern_histogram(&reversed).unwrap()
        );
    }

    #[test]
    fn test_empty_matrix() {
        let histogram = build_pattern_histogram(&Array2::<u8>::zeros((0, 39))).unwrap();
        assert!(histogram.is_empty());
        assert_eq!(histogram.total(), 0);
    }

    #[test]
    fn test_zero_width_rows_share_one_pattern() {
        let histogram = build_pattern_histogram(&Array2::<u8>::zeros((4, 0))).unwrap();
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.count(&key("")), 4);
    }

    #[test]
    fn test_rejects_non_binary_row() {
        let m = array![[0u8, 1], [3, 0]];
        assert!(matches!(
            build_pattern_histogram(&m),
            Err(CanonError::Domain { .. })
        ));
    }

    #[test]
    fn test_iterates_in_key_order() {
        let histogram: PatternHistogram = [key("10"), key("01"), key("11"), key("01")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = histogram.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["01", "10", "11"]);
    }

    #[test]
    fn test_deserialize_validates_keys() {
        let histogram: PatternHistogram = serde_json::from_str(r#"{"01": 1, "10": 3}"#).unwrap();
        assert_eq!(histogram.count(&key("10")), 3);
        assert_eq!(histogram.total(), 4);

        let bad: std::result::Result<PatternHistogram, _> =
            serde_json::from_str(r#"{"abc": 3, "01": 1}"#);
        assert!(bad.is_err());
    }
}
