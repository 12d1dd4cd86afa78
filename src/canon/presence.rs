// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Presence matrix construction.
//!
//! Row `i` of the presence matrix marks which domain values occur in event
//! `i`. Unlike the validator, this is a hard gate: a value outside the domain
//! fails the whole call.

use crate::domain::{Domain, ValueSet};
use crate::error::Result;
use ndarray::Array2;
use tracing::debug;

/// Build the `(num_events, domain.size())` presence matrix for `events`.
///
/// Each entry is 0 or 1. Repeated values in one event set their column
/// once. With no events the result has zero rows but still `domain.size()`
/// columns.
///
/// # Errors
///
/// [`CanonError::Range`](crate::error::CanonError::Range) for the first value
/// outside `[value_min, value_max]`.
///
/// # Examples
///
/// ```
/// use presence_lattice::canon::build_presence_matrix;
/// use presence_lattice::domain::Domain;
///
/// let matrix = build_presence_matrix(&[[1i64, 2, 3, 4, 5]], &Domain::default()).unwrap();
/// assert_eq!(matrix.dim(), (1, 39));
/// assert_eq!(matrix.row(0).sum(), 5);
/// ```
pub fn build_presence_matrix<I, E>(events: I, domain: &Domain) -> Result<Array2<u8>>
where
    I: IntoIterator<Item = E>,
    E: AsRef<[i64]>,
{
    let rows = events
        .into_iter()
        .enumerate()
        .map(|(index, event)| ValueSet::from_event(domain, event.as_ref(), index))
        .collect::<Result<Vec<_>>>()?;

    let mut matrix = Array2::zeros((rows.len(), domain.size()));
    for (set, row) in rows.iter().zip(matrix.rows_mut()) {
        set.write_row(row);
    }

    debug!(rows = rows.len(), columns = domain.size(), "built presence matrix");
    Ok(matrix)
}
