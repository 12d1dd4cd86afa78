// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lattice levels: patterns ranked by frequency.

use crate::lattice::{PatternHistogram, PatternKey};
use serde::{Deserialize, Serialize};

/// Rank of one distinct pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeLevel {
    pub key: PatternKey,
    /// 0 for the most frequent pattern.
    pub level: usize,
    pub count: usize,
}

/// Rank every pattern of `histogram` by descending count.
///
/// Equal counts are ordered by ascending [`PatternKey`], so the result does
/// not depend on the order rows were encountered. Levels are exactly
/// `0..histogram.len()`.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use presence_lattice::lattice::{assign_lattice_levels, build_pattern_histogram};
///
/// let m = array![[0u8, 1], [1, 0], [1, 0]];
/// let levels = assign_lattice_levels(&build_pattern_histogram(&m).unwrap());
///
/// assert_eq!(levels[0].key.as_str(), "10");
/// assert_eq!(levels[0].level, 0);
/// assert_eq!(levels[1].key.as_str(), "01");
/// assert_eq!(levels[1].level, 1);
/// ```
pub fn assign_lattice_levels(histogram: &PatternHistogram) -> Vec<LatticeLevel> {
    let mut ranked: Vec<(&PatternKey, usize)> =
        histogram.iter().map(|(key, &count)| (key, count)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .enumerate()
        .map(|(level, (key, count))| LatticeLevel {
            key: key.clone(),
            level,
            count,
        })
        .collect()
}
