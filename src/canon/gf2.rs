// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reduction of integer matrices to GF(2).

use crate::canon::entry::IntegerEntry;
use crate::error::{CanonError, Result};
use ndarray::{Array2, ArrayBase, Data, Ix2};

/// Reduce every entry modulo 2.
///
/// Uses Euclidean remainder, so negative odd entries map to 1. Accepts any
/// [`IntegerEntry`] element type.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use presence_lattice::canon::to_gf2;
///
/// let reduced = to_gf2(&array![[-3i64, -2, -1], [0, 1, 2]]);
/// assert_eq!(reduced, array![[1u8, 0, 1], [0, 1, 0]]);
/// ```
pub fn to_gf2<S, T>(matrix: &ArrayBase<S, Ix2>) -> Array2<u8>
where
    S: Data<Elem = T>,
    T: IntegerEntry,
{
    matrix.mapv(|v| v.parity())
}

/// Reduce a floating-point matrix modulo 2, rejecting non-integer entries.
///
/// # Errors
///
/// [`CanonError::NonIntegral`] for the first entry (in row-major order) that
/// is fractional, infinite or NaN.
pub fn to_gf2_f64<S>(matrix: &ArrayBase<S, Ix2>) -> Result<Array2<u8>>
where
    S: Data<Elem = f64>,
{
    if let Some(((row, col), &value)) = matrix
        .indexed_iter()
        .find(|(_, v)| !v.is_finite() || v.fract() != 0.0)
    {
        return Err(CanonError::NonIntegral { row, col, value });
    }
    Ok(matrix.mapv(|v| v.rem_euclid(2.0) as u8))
}
