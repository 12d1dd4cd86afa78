// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Downstream stages that consume canonical matrices.
//!
//! Both stages exist only as interfaces for now. The shipped implementations
//! say so through [`Capability::NotImplemented`] rather than quietly returning
//! empty data, so callers can tell a stub from a result.

pub mod exclusion;
pub mod quantumize;

pub use exclusion::{ExclusionConfig, ExclusionPredictor, NullExclusionPredictor};
pub use quantumize::{HoleQuantumizer, QuantumizeConfig, ZeroQuantumizer};

use serde::{Deserialize, Serialize};

/// Whether a collaborator stage produces real output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    Implemented,
    /// Output has the right shape but carries no information.
    NotImplemented,
}

impl Capability {
    pub fn is_implemented(self) -> bool {
        self == Capability::Implemented
    }
}
