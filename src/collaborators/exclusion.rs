// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exclusion prediction: which values the next event will *not* contain.

use crate::collaborators::Capability;
use crate::combinatorics::PatternStats;
use crate::domain::Domain;
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

/// Sizing of an exclusion prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ExclusionConfig {
    /// Number of values in the domain being predicted over.
    pub num_values: usize,
    /// Number of values to exclude.
    pub exclusion_size: usize,
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self {
            num_values: Domain::default().size(),
            exclusion_size: 20,
        }
    }
}

/// Predicts a set of values to exclude from the next event.
pub trait ExclusionPredictor {
    /// Whether this predictor does real work.
    fn capability(&self) -> Capability;

    /// Values predicted to be absent.
    fn predict(
        &self,
        presence: ArrayView2<'_, u8>,
        complement: ArrayView2<'_, u8>,
        features: ArrayView2<'_, u8>,
        stats: &PatternStats,
        config: &ExclusionConfig,
    ) -> Vec<i64>;

    fn name(&self) -> &str;
}

/// Placeholder predictor that never excludes anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullExclusionPredictor;

impl ExclusionPredictor for NullExclusionPredictor {
    fn capability(&self) -> Capability {
        Capability::NotImplemented
    }

    fn predict(
        &self,
        _presence: ArrayView2<'_, u8>,
        _complement: ArrayView2<'_, u8>,
        _features: ArrayView2<'_, u8>,
        _stats: &PatternStats,
        _config: &ExclusionConfig,
    ) -> Vec<i64> {
        Vec::new()
    }

    fn name(&self) -> &str {
        "NullExclusionPredictor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_default_config() {
        let config = ExclusionConfig::default();
        assert_eq!(config.num_values, 39);
        assert_eq!(config.num_values, Domain::default().size());
        assert_eq!(config.exclusion_size, 20);
    }

    #[test]
    fn test_null_predictor() {
        let presence = Array2::<u8>::zeros((3, 39));
        let complement = Array2::<u8>::ones((3, 39));
        let features = Array2::<u8>::zeros((3, 0));
        let predicted = NullExclusionPredictor.predict(
            presence.view(),
            complement.view(),
            features.view(),
            &PatternStats::default(),
            &ExclusionConfig::default(),
        );
        assert!(predicted.is_empty());
        assert_eq!(NullExclusionPredictor.capability(), Capability::NotImplemented);
    }

    #[test]
    fn test_config_deserialize() {
        let config: ExclusionConfig = serde_json::from_str(r#"{"exclusion_size": 10}"#).unwrap();
        assert_eq!(config.num_values, 39);
        assert_eq!(config.exclusion_size, 10);
    }
}
