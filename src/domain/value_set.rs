// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ValueSet type for representing the values of one event as a bitset.
//!
//! Bit `i` stands for the domain value at offset `i` (see
//! [`Domain::offset_of`]). Domains wider than 64 values span several `u64`
//! words. Inserting a value twice is a no-op, which gives presence rows their
//! set-OR semantics.
//!
//! # Examples
//!
//! ```
//! use presence_lattice::domain::{Domain, ValueSet};
//!
//! let domain = Domain::default();
//! let set = ValueSet::from_event(&domain, &[1, 2, 3, 3, 39], 0).unwrap();
//!
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 2, 38]);
//! ```

use crate::domain::Domain;
use crate::error::{CanonError, Result};
use ndarray::ArrayViewMut1;

const WORD_BITS: usize = 64;

/// A set of domain offsets represented as a bitset of `width` bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueSet {
    words: Vec<u64>,
    width: usize,
}

impl ValueSet {
    /// Create an empty set over `width` offsets.
    pub fn empty(width: usize) -> Self {
        Self {
            words: vec![0; width.div_ceil(WORD_BITS)],
            width,
        }
    }

    /// Build the set of offsets for one event.
    ///
    /// Fails with [`CanonError::Range`] on the first value outside the domain.
    pub fn from_event(domain: &Domain, event: &[i64], event_index: usize) -> Result<Self> {
        let mut set = Self::empty(domain.size());
        for &value in event {
            let offset = domain.offset_of(value).ok_or_else(|| {
                CanonError::range(value, domain.value_min(), domain.value_max(), event_index)
            })?;
            set.insert(offset);
        }
        Ok(set)
    }

    /// Insert `offset` into the set.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= width`.
    pub fn insert(&mut self, offset: usize) {
        self.check(offset);
        self.words[offset / WORD_BITS] |= 1u64 << (offset % WORD_BITS);
    }

    /// Iterate over offsets in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(word_idx, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(word_idx * WORD_BITS + bit)
            })
        })
    }

    /// Write this set as a 0/1 row. The row must be exactly `width` long.
    pub fn write_row(&self, mut row: ArrayViewMut1<'_, u8>) {
        debug_assert_eq!(row.len(), self.width);
        row.fill(0);
        for offset in self.iter() {
            row[offset] = 1;
        }
    }

    fn check(&self, offset: usize) {
        assert!(
            offset < self.width,
            "Offset out of range: {} >= {}",
            offset,
            self.width
        );
    }
}
