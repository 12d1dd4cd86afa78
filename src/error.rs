// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for canonicalization.
//!
//! Structural problems in raw events are *not* errors: the validator collects
//! them as [`ValidationIssue`](crate::canon::ValidationIssue)s. The variants
//! here are the hard failures that abort a single call.

use thiserror::Error;

/// Errors raised by matrix construction, binary transforms and configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanonError {
    /// A value outside the declared domain reached matrix construction.
    #[error("Value {value} out of range [{value_min}, {value_max}] in event {event_index}")]
    Range {
        value: i64,
        value_min: i64,
        value_max: i64,
        event_index: usize,
    },

    /// A binary-only transform saw an entry other than 0 or 1.
    ///
    /// `values` holds every distinct value present in the input, sorted.
    #[error("expected a binary matrix; found values: {values:?}")]
    Domain { values: Vec<i128> },

    /// A floating-point entry could not be read as an integer.
    #[error("entry ({row}, {col}) is not an integer: {value}")]
    NonIntegral { row: usize, col: usize, value: f64 },

    /// Two matrices that must agree in shape do not.
    #[error("shape mismatch: expected {expected:?}, actual {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// A quantumization option name that is not recognized.
    #[error("unknown quantumization option: {key}")]
    UnknownOption { key: String },

    /// Invalid configuration parameter.
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// Strict pipeline run refused a batch with validation issues.
    #[error("{count} validation issue(s) in strict mode")]
    InvalidEvents { count: usize },
}

impl CanonError {
    /// Create a Range error.
    pub fn range(value: i64, value_min: i64, value_max: i64, event_index: usize) -> Self {
        Self::Range {
            value,
            value_min,
            value_max,
            event_index,
        }
    }

    /// Create a Domain error from the distinct values found.
    pub fn domain(values: impl IntoIterator<Item = i128>) -> Self {
        let mut values: Vec<i128> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self::Domain { values }
    }

    /// Create a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CanonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_message() {
        let err = CanonError::range(40, 1, 39, 0);
        assert_eq!(err.to_string(), "Value 40 out of range [1, 39] in event 0");
    }

    #[test]
    fn test_domain_values_sorted_and_deduplicated() {
        let err = CanonError::domain([2, 0, 1, 2, -3]);
        assert_eq!(
            err,
            CanonError::Domain {
                values: vec![-3, 0, 1, 2]
            }
        );
        assert!(err.to_string().contains("[-3, 0, 1, 2]"));
    }

    #[test]
    fn test_config_message() {
        let err = CanonError::config("value_min must not exceed value_max");
        assert_eq!(
            err.to_string(),
            "invalid configuration: value_min must not exceed value_max"
        );
    }
}
