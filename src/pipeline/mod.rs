// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end canonicalization of one dataset snapshot.
//!
//! A [`Canonicalizer`] runs the stages in order:
//!
//! 1. validate events (issues are kept, and only abort in strict mode)
//! 2. build the presence matrix (out-of-domain values abort)
//! 3. build the hole matrix, the pattern histogram, lattice levels and
//!    pattern stats
//!
//! The products are returned together as a [`Snapshot`] owned by the caller.
//!
//! # Example
//!
//! ```
//! use presence_lattice::pipeline::{CanonConfig, Canonicalizer, Counters};
//!
//! let events = vec![vec![1i64, 2, 3, 4, 5], vec![1, 2, 3, 4, 5], vec![2, 4, 6, 8, 10]];
//! let snapshot = Canonicalizer::new(CanonConfig::default()).run(&events).unwrap();
//!
//! assert!(snapshot.issues.is_empty());
//! assert_eq!(snapshot.presence.dim(), (3, 39));
//! assert_eq!(snapshot.levels[0].count, 2);
//! assert_eq!(snapshot.statistics.get(Counters::DistinctPatterns), 2);
//! ```

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::canon::{
    build_complement_matrix, build_presence_matrix, validate_events, ValidationIssue,
    ValidationMode,
};
use crate::collaborators::{
    ExclusionConfig, ExclusionPredictor, HoleQuantumizer, QuantumizeConfig,
};
use crate::combinatorics::{basic_pattern_counts, PatternStats};
use crate::domain::Domain;
use crate::error::{CanonError, Result};
use crate::lattice::{
    assign_lattice_levels, build_pattern_histogram, LatticeLevel, PatternHistogram,
};
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Settings for a [`Canonicalizer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CanonConfig {
    pub domain: Domain,
    pub validation_mode: ValidationMode,
    /// Refuse any batch with validation issues.
    pub strict: bool,
}

/// Everything derived from one batch of events.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub issues: Vec<ValidationIssue>,
    pub presence: Array2<u8>,
    pub complement: Array2<u8>,
    pub histogram: PatternHistogram,
    pub levels: Vec<LatticeLevel>,
    pub pattern_stats: PatternStats,
    pub statistics: Statistics,
}

impl Snapshot {
    /// Run a quantumization operator over this snapshot's matrices.
    pub fn quantumize(
        &self,
        operator: &dyn HoleQuantumizer,
        config: &QuantumizeConfig,
    ) -> Result<Array2<u8>> {
        if !operator.capability().is_implemented() {
            warn!(operator = operator.name(), "quantumization operator is a stub");
        }
        operator.quantumize(self.presence.view(), self.complement.view(), config)
    }

    /// Ask an exclusion predictor for values to exclude.
    pub fn predict_exclusions(
        &self,
        predictor: &dyn ExclusionPredictor,
        features: ArrayView2<'_, u8>,
        config: &ExclusionConfig,
    ) -> Vec<i64> {
        if !predictor.capability().is_implemented() {
            warn!(predictor = predictor.name(), "exclusion predictor is a stub");
        }
        predictor.predict(
            self.presence.view(),
            self.complement.view(),
            features,
            &self.pattern_stats,
            config,
        )
    }
}

/// Runs the canonicalization stages with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Canonicalizer {
    config: CanonConfig,
}

impl Canonicalizer {
    pub fn new(config: CanonConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CanonConfig {
        &self.config
    }

    /// Canonicalize one batch of events.
    ///
    /// # Errors
    ///
    /// - [`CanonError::InvalidEvents`] in strict mode when validation found
    ///   any issue
    /// - [`CanonError::Range`] when an event holds a value outside the domain
    pub fn run<I, E>(&self, events: I) -> Result<Snapshot>
    where
        I: IntoIterator<Item = E>,
        E: AsRef<[i64]>,
    {
        let events: Vec<E> = events.into_iter().collect();
        let domain = &self.config.domain;
        let mut statistics = Statistics::new();
        statistics.add(Counters::EventsSeen, events.len());

        let issues = validate_events(&events, domain, self.config.validation_mode);
        statistics.add(Counters::IssuesReported, issues.len());
        if !issues.is_empty() {
            warn!(
                issues = issues.len(),
                first = %issues[0],
                "validation found problems"
            );
            if self.config.strict {
                return Err(CanonError::InvalidEvents {
                    count: issues.len(),
                });
            }
        }

        let presence = build_presence_matrix(&events, domain)?;
        statistics.add(Counters::RowsEncoded, presence.nrows());

        let complement = build_complement_matrix(&presence)?;
        let histogram = build_pattern_histogram(&presence)?;
        let levels = assign_lattice_levels(&histogram);
        statistics.add(Counters::DistinctPatterns, levels.len());
        let pattern_stats = basic_pattern_counts(&presence);
        debug!(?pattern_stats, "summarized presence matrix");

        info!(
            events = events.len(),
            issues = issues.len(),
            patterns = levels.len(),
            "canonicalized snapshot"
        );

        Ok(Snapshot {
            issues,
            presence,
            complement,
            histogram,
            levels,
            pattern_stats,
            statistics,
        })
    }
}
