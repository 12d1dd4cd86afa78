// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pattern lattice over the rows of a binary matrix.
//!
//! Each row is reduced to a [`PatternKey`], the keys are counted into a
//! [`PatternHistogram`], and the distinct patterns are ranked into
//! [`LatticeLevel`]s by descending frequency.

pub mod histogram;
pub mod levels;
pub mod pattern;

pub use histogram::{build_pattern_histogram, PatternHistogram};
pub use levels::{assign_lattice_levels, LatticeLevel};
pub use pattern::{encode_row_pattern, PatternKey};
