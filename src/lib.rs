// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical GF(2) encodings of small integer events, and the pattern
//! lattice over them.
//!
//! An *event* is a short strictly ascending tuple of integers drawn from a
//! fixed domain (by default five values from `1..=39`).
//!
//! # Architecture
//!
//! The modules are layered leaf-first:
//!
//! - [`domain`]: the value domain and a bitset of domain values
//! - [`canon`]: event validation, presence matrices, GF(2) reduction and
//!   complement (hole) matrices
//! - [`lattice`]: pattern keys, the pattern histogram and lattice levels
//! - [`combinatorics`]: row differences and pattern stats
//! - [`collaborators`]: interfaces for quantumization and exclusion
//!   prediction, with stub implementations
//! - [`pipeline`]: runs every stage over one batch of events
//!
//! ```text
//! events ──validate──> issues
//!    └──presence──> presence ──┬─> complement
//!                              ├─> histogram ─> levels
//!                              └─> pattern stats
//! ```
//!
//! Every operation is a pure function over in-memory arrays; nothing is
//! shared between calls.

pub mod canon;
pub mod collaborators;
pub mod combinatorics;
pub mod domain;
pub mod error;
pub mod lattice;
pub mod pipeline;

// Re-export commonly used types
pub use domain::Domain;
pub use error::{CanonError, Result};
pub use pipeline::{CanonConfig, Canonicalizer, Snapshot};
