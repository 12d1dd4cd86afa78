// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PatternKey: the canonical identifier of one binary row.
//!
//! The key spells the row one character per column, `'1'` for a set bit and
//! `'0'` otherwise, so two rows of the same width share a key exactly when
//! their contents agree. Keys order lexicographically, which is the
//! tie-break used for lattice levels.
//!
//! # Examples
//!
//! ```
//! use ndarray::array;
//! use presence_lattice::lattice::PatternKey;
//!
//! let key = PatternKey::from_row(array![1u8, 0, 1].view()).unwrap();
//! assert_eq!(key.as_str(), "101");
//! assert_eq!(format!("{}", key), "101");
//! assert_eq!(key.ones(), 2);
//! ```

use crate::error::{CanonError, Result};
use ndarray::{ArrayBase, Data, Ix1};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical string form of a binary row.
///
/// Serialized as the bare string. Deserialization rejects any character
/// other than `'0'` and `'1'`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PatternKey(String);

impl TryFrom<String> for PatternKey {
    type Error = CanonError;

    fn try_from(bits: String) -> Result<Self> {
        if bits.bytes().all(|b| b == b'0' || b == b'1') {
            Ok(Self(bits))
        } else {
            Err(CanonError::domain(bits.chars().map(|c| i128::from(u32::from(c)))))
        }
    }
}

impl From<PatternKey> for String {
    fn from(key: PatternKey) -> Self {
        key.0
    }
}

impl PatternKey {
    /// Encode a row whose entries are all 0 or 1.
    ///
    /// # Errors
    ///
    /// [`CanonError::Domain`] listing the distinct values of the row when
    /// any entry is not binary.
    pub fn from_row<S>(row: ArrayBase<S, Ix1>) -> Result<Self>
    where
        S: Data<Elem = u8>,
    {
        let mut bits = String::with_capacity(row.len());
        for &v in row.iter() {
            match v {
                0 => bits.push('0'),
                1 => bits.push('1'),
                _ => return Err(CanonError::domain(row.iter().map(|&v| i128::from(v)))),
            }
        }
        Ok(Self(bits))
    }

    /// Number of columns the key spans.
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Number of set bits.
    pub fn ones(&self) -> usize {
        self.0.bytes().filter(|&b| b == b'1').count()
    }

    /// Bits of the key, column order.
    pub fn bits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encode one row of a binary matrix as its [`PatternKey`].
pub fn encode_row_pattern<S>(row: ArrayBase<S, Ix1>) -> Result<PatternKey>
where
    S: Data<Elem = u8>,
{
    PatternKey::from_row(row)
}
