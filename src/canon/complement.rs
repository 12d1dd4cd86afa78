// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Complement ("hole") matrices.
//!
//! Where the presence matrix marks the values an event contains, the hole
//! matrix marks the values it leaves out.

use crate::canon::entry::IntegerEntry;
use crate::error::{CanonError, Result};
use ndarray::{Array2, ArrayBase, Data, Ix2};
use std::collections::BTreeSet;

/// Return `1 - entry` for every entry of a binary matrix.
///
/// The full set of distinct values is checked before anything is
/// transformed.
///
/// # Errors
///
/// [`CanonError::Domain`] listing every distinct value present when any
/// entry is not 0 or 1.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use presence_lattice::canon::build_complement_matrix;
///
/// let holes = build_complement_matrix(&array![[1u8, 0, 1]]).unwrap();
/// assert_eq!(holes, array![[0u8, 1, 0]]);
///
/// assert!(build_complement_matrix(&array![[0i64, 2]]).is_err());
/// ```
pub fn build_complement_matrix<S, T>(matrix: &ArrayBase<S, Ix2>) -> Result<Array2<u8>>
where
    S: Data<Elem = T>,
    T: IntegerEntry,
{
    let distinct: BTreeSet<T> = matrix.iter().copied().collect();
    if distinct.iter().any(|v| v.as_bit().is_none()) {
        return Err(CanonError::domain(distinct.into_iter().map(|v| v.widen())));
    }

    Ok(matrix.mapv(|v| 1 - v.parity()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_complement() {
        let m = array![[1u8, 0, 0], [0, 1, 1]];
        assert_eq!(
            build_complement_matrix(&m).unwrap(),
            array![[0u8, 1, 1], [1, 0, 0]]
        );
    }

    #[test]
    fn test_double_complement() {
        let m = array![[1u8, 0, 1, 1], [0, 0, 0, 0]];
        let twice = build_complement_matrix(&build_complement_matrix(&m).unwrap()).unwrap();
        assert_eq!(twice, m);
    }

    #[test]
    fn test_reports_all_distinct_values() {
        let m = array![[0i64, 1, 2], [-1, 2, 0]];
        assert_eq!(
            build_complement_matrix(&m).unwrap_err(),
            CanonError::Domain {
                values: vec![-1, 0, 1, 2]
            }
        );
    }

    #[test]
    fn test_wide_types() {
        let m = array![[1u64, 0], [0, 1]];
        assert_eq!(build_complement_matrix(&m).unwrap(), array![[0u8, 1], [1, 0]]);

        let m = array![[0usize, 1, 1]];
        assert_eq!(build_complement_matrix(&m).unwrap(), array![[1u8, 0, 0]]);

        let m = array![[0u64, u64::MAX]];
        assert_eq!(
            build_complement_matrix(&m).unwrap_err(),
            CanonError::Domain {
                values: vec![0, u64::MAX as i128]
            }
        );

        let m = array![[1i128, -1]];
        assert!(build_complement_matrix(&m).is_err());
    }

    #[test]
    fn test_empty_matrix() {
        let m = Array2::<u8>::zeros((0, 39));
        assert_eq!(build_complement_matrix(&m).unwrap().dim(), (0, 39));
    }

    #[test]
    fn test_all_zero_becomes_all_one() {
        let m = Array2::<u8>::zeros((2, 3));
        assert_eq!(
            build_complement_matrix(&m).unwrap(),
            Array2::<u8>::ones((2, 3))
        );
    }
}
