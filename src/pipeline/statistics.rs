// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by a [`Canonicalizer`](crate::pipeline::Canonicalizer) run,
//! one slot per [`Counters`] variant.

use serde::{Deserialize, Serialize};
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    EventsSeen,
    IssuesReported,
    RowsEncoded,
    DistinctPatterns,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Add `amount` to the specified counter.
    pub(crate) fn add(&mut self, counter: Counters, amount: usize) {
        self.stats[counter as usize] += amount as u64;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::EventsSeen), 0);
        assert_eq!(stats.get(Counters::DistinctPatterns), 0);
    }

    #[test]
    fn test_add() {
        let mut stats = Statistics::new();
        stats.add(Counters::RowsEncoded, 3);
        stats.add(Counters::RowsEncoded, 2);
        assert_eq!(stats.get(Counters::RowsEncoded), 5);
        assert_eq!(stats.get(Counters::IssuesReported), 0);
    }
}
