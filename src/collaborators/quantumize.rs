// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Zero quantumization: hole matrices to hole features.
//!
//! The operator itself is not designed yet. [`ZeroQuantumizer`] fixes the
//! interface and produces a zero-width feature matrix.

use crate::collaborators::Capability;
use crate::error::{CanonError, Result};
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recognized quantumization options.
///
/// Every option is optional; unset means "operator default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuantumizeConfig {
    /// Number of consecutive events grouped into one window.
    #[serde(default)]
    pub window_size: Option<u32>,

    /// Minimum run of consecutive absences before a hole counts as persistent.
    #[serde(default)]
    pub persistence_threshold: Option<u32>,
}

impl QuantumizeConfig {
    /// Build a config from string-keyed integer options.
    ///
    /// The accepted keys are the field names, the same set serde accepts.
    ///
    /// # Errors
    ///
    /// [`CanonError::UnknownOption`] for any other key, and
    /// [`CanonError::Config`] for a value outside `0..=u32::MAX`.
    pub fn from_options(options: &BTreeMap<String, i64>) -> Result<Self> {
        let mut config = Self::default();
        for (key, &value) in options {
            let slot = match key.as_str() {
                "window_size" => &mut config.window_size,
                "persistence_threshold" => &mut config.persistence_threshold,
                _ => return Err(CanonError::UnknownOption { key: key.clone() }),
            };
            let value = u32::try_from(value).map_err(|_| {
                CanonError::config(format!("{} must be a non-negative integer, got {}", key, value))
            })?;
            *slot = Some(value);
        }
        Ok(config)
    }
}

/// Turns presence and hole matrices into per-event hole features.
pub trait HoleQuantumizer {
    /// Whether this operator does real work.
    fn capability(&self) -> Capability;

    /// Produce a feature matrix with one row per event.
    fn quantumize(
        &self,
        presence: ArrayView2<'_, u8>,
        complement: ArrayView2<'_, u8>,
        config: &QuantumizeConfig,
    ) -> Result<Array2<u8>>;

    fn name(&self) -> &str;
}

/// Placeholder operator: one row per event, no feature columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroQuantumizer;

impl HoleQuantumizer for ZeroQuantumizer {
    fn capability(&self) -> Capability {
        Capability::NotImplemented
    }

    fn quantumize(
        &self,
        presence: ArrayView2<'_, u8>,
        complement: ArrayView2<'_, u8>,
        _config: &QuantumizeConfig,
    ) -> Result<Array2<u8>> {
        if presence.dim() != complement.dim() {
            return Err(CanonError::ShapeMismatch {
                expected: presence.dim(),
                actual: complement.dim(),
            });
        }
        Ok(Array2::zeros((presence.nrows(), 0)))
    }

    fn name(&self) -> &str {
        "ZeroQuantumizer"
    }
}
