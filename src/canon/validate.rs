// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structural validation of raw events.
//!
//! Validation never fails: every problem is collected as a
//! [`ValidationIssue`] so the caller can decide how strict to be.
//!
//! Checks per event, in priority order:
//! 1. arity (a wrong length suppresses the other checks for that event);
//! 2. every value within `[value_min, value_max]`;
//! 3. strictly ascending order.
//!
//! # Examples
//!
//! ```
//! use presence_lattice::canon::{validate_events, IssueKind, ValidationMode};
//! use presence_lattice::domain::Domain;
//!
//! let events = [vec![1i64, 2, 3, 4, 5], vec![5, 4, 3, 2, 1], vec![1, 2]];
//! let issues = validate_events(&events, &Domain::default(), ValidationMode::Complete);
//!
//! assert_eq!(issues.len(), 2);
//! assert_eq!(issues[0].index, 1);
//! assert_eq!(issues[0].kind, IssueKind::Ordering);
//! assert_eq!(issues[1].message(), "Invalid tuple length: 2 (expected 5)");
//! ```

use crate::domain::Domain;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// How far the validator walks the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Validate every event.
    #[default]
    Complete,

    /// Stop after the first event with the expected length has been checked.
    ///
    /// Events of the wrong length before it are still reported. When no event
    /// has the expected length, every event is walked and every length issue
    /// is returned. Kept for callers that depend on the early stop.
    FirstConforming,
}

/// What is wrong with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    Length { actual: usize, expected: usize },
    Range,
    Ordering,
}

/// One problem found in one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Zero-based position of the event in the input.
    pub index: usize,
    pub kind: IssueKind,
    /// The offending event, verbatim.
    pub event: Vec<i64>,
}

impl ValidationIssue {
    /// Human-readable description, without the index.
    pub fn message(&self) -> String {
        match self.kind {
            IssueKind::Length { actual, expected } => {
                format!("Invalid tuple length: {} (expected {})", actual, expected)
            }
            IssueKind::Range => format!("Value out of range in event: {:?}", self.event),
            IssueKind::Ordering => {
                format!("Event is not strictly ascending: {:?}", self.event)
            }
        }
    }

    /// The `(event_index, message)` pair form.
    pub fn as_pair(&self) -> (usize, String) {
        (self.index, self.message())
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event {}: {}", self.index, self.message())
    }
}

/// Validate events against `domain`, returning issues in input order.
pub fn validate_events<I, E>(
    events: I,
    domain: &Domain,
    mode: ValidationMode,
) -> Vec<ValidationIssue>
where
    I: IntoIterator<Item = E>,
    E: AsRef<[i64]>,
{
    let mut issues = Vec::new();
    let mut checked = 0usize;

    for (index, event) in events.into_iter().enumerate() {
        let event = event.as_ref();
        checked += 1;

        if event.len() != domain.tuple_size() {
            issues.push(ValidationIssue {
                index,
                kind: IssueKind::Length {
                    actual: event.len(),
                    expected: domain.tuple_size(),
                },
                event: event.to_vec(),
            });
            continue;
        }

        if event.iter().any(|&v| !domain.contains(v)) {
            issues.push(ValidationIssue {
                index,
                kind: IssueKind::Range,
                event: event.to_vec(),
            });
        }

        if event.windows(2).any(|pair| pair[0] >= pair[1]) {
            issues.push(ValidationIssue {
                index,
                kind: IssueKind::Ordering,
                event: event.to_vec(),
            });
        }

        if mode == ValidationMode::FirstConforming {
            break;
        }
    }

    debug!(
        events = checked,
        issues = issues.len(),
        ?mode,
        "validated events"
    );
    issues
}
