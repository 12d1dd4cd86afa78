// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The value domain events are drawn from.
//!
//! A [`Domain`] fixes the inclusive bounds `[value_min, value_max]` and the
//! expected event arity. Column `j` of every matrix built over the domain
//! stands for the value `value_min + j`.
//!
//! # Examples
//!
//! ```
//! use presence_lattice::domain::Domain;
//!
//! let domain = Domain::default();
//! assert_eq!(domain.value_min(), 1);
//! assert_eq!(domain.value_max(), 39);
//! assert_eq!(domain.tuple_size(), 5);
//! assert_eq!(domain.size(), 39);
//! assert_eq!(domain.offset_of(1), Some(0));
//! assert_eq!(domain.offset_of(40), None);
//! ```

pub mod value_set;

pub use value_set::ValueSet;

use crate::error::{CanonError, Result};
use serde::{Deserialize, Serialize};

/// Default smallest admissible value.
pub const DEFAULT_VALUE_MIN: i64 = 1;

/// Default largest admissible value.
pub const DEFAULT_VALUE_MAX: i64 = 39;

/// Default number of values per event.
pub const DEFAULT_TUPLE_SIZE: usize = 5;

/// Validated domain bounds and event arity.
///
/// Deserialization goes through the same checks as [`Domain::new`], so a
/// `Domain` value always satisfies `value_min <= value_max` and
/// `tuple_size > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDomain", into = "RawDomain")]
pub struct Domain {
    value_min: i64,
    value_max: i64,
    tuple_size: usize,
    size: usize,
}

/// Unchecked serialized form of a [`Domain`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
struct RawDomain {
    value_min: i64,
    value_max: i64,
    tuple_size: usize,
}

impl Default for RawDomain {
    fn default() -> Self {
        Self {
            value_min: DEFAULT_VALUE_MIN,
            value_max: DEFAULT_VALUE_MAX,
            tuple_size: DEFAULT_TUPLE_SIZE,
        }
    }
}

impl TryFrom<RawDomain> for Domain {
    type Error = CanonError;

    fn try_from(raw: RawDomain) -> Result<Self> {
        Domain::new(raw.value_min, raw.value_max, raw.tuple_size)
    }
}

impl From<Domain> for RawDomain {
    fn from(domain: Domain) -> Self {
        Self {
            value_min: domain.value_min,
            value_max: domain.value_max,
            tuple_size: domain.tuple_size,
        }
    }
}

impl Domain {
    /// Create a domain, rejecting empty ranges and zero arity.
    pub fn new(value_min: i64, value_max: i64, tuple_size: usize) -> Result<Self> {
        if value_min > value_max {
            return Err(CanonError::config(format!(
                "value_min ({}) must not exceed value_max ({})",
                value_min, value_max
            )));
        }
        if tuple_size == 0 {
            return Err(CanonError::config("tuple_size must be positive"));
        }
        let size = value_max
            .checked_sub(value_min)
            .and_then(|span| span.checked_add(1))
            .and_then(|span| usize::try_from(span).ok())
            .ok_or_else(|| {
                CanonError::config(format!(
                    "domain [{}, {}] is too large",
                    value_min, value_max
                ))
            })?;

        Ok(Self {
            value_min,
            value_max,
            tuple_size,
            size,
        })
    }

    /// Create a domain with the default tuple size.
    pub fn with_bounds(value_min: i64, value_max: i64) -> Result<Self> {
        Self::new(value_min, value_max, DEFAULT_TUPLE_SIZE)
    }

    pub fn value_min(&self) -> i64 {
        self.value_min
    }

    pub fn value_max(&self) -> i64 {
        self.value_max
    }

    pub fn tuple_size(&self) -> usize {
        self.tuple_size
    }

    /// Number of columns in a matrix over this domain.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether `value` lies in `[value_min, value_max]`.
    pub fn contains(&self, value: i64) -> bool {
        self.value_min <= value && value <= self.value_max
    }

    /// Column index for `value`, or `None` when it is outside the domain.
    pub fn offset_of(&self, value: i64) -> Option<usize> {
        if self.contains(value) {
            // In range, so the difference fits: size itself fits in usize.
            Some((value - self.value_min) as usize)
        } else {
            None
        }
    }

    /// Value represented by column `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= self.size()`.
    pub fn value_at(&self, offset: usize) -> i64 {
        assert!(
            offset < self.size,
            "Offset out of range: {} >= {}",
            offset,
            self.size
        );
        self.value_min + offset as i64
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            value_min: DEFAULT_VALUE_MIN,
            value_max: DEFAULT_VALUE_MAX,
            tuple_size: DEFAULT_TUPLE_SIZE,
            size: (DEFAULT_VALUE_MAX - DEFAULT_VALUE_MIN + 1) as usize,
        }
    }
}
