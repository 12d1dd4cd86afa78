// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! GF(2) canonicalization of event data.
//!
//! - `validate`: soft structural checks on raw events
//! - `presence`: events to binary presence matrix
//! - `gf2`: integer matrices reduced modulo 2
//! - `complement`: binary matrix to hole matrix
//! - `entry`: integer element types both transforms accept

pub mod complement;
pub mod entry;
pub mod gf2;
pub mod presence;
pub mod validate;

pub use complement::build_complement_matrix;
pub use entry::IntegerEntry;
pub use gf2::{to_gf2, to_gf2_f64};
pub use presence::build_presence_matrix;
pub use validate::{validate_events, IssueKind, ValidationIssue, ValidationMode};
