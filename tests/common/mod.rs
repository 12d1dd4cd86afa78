// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use ndarray::Array2;
use proptest::prelude::*;

/// Strategy for well-formed events over `[value_min, value_max]`.
///
/// `subsequence` keeps source order, so every event is strictly ascending.
pub fn well_formed_event(
    value_min: i64,
    value_max: i64,
    tuple_size: usize,
) -> impl Strategy<Value = Vec<i64>> {
    let values: Vec<i64> = (value_min..=value_max).collect();
    proptest::sample::subsequence(values, tuple_size)
}

/// Strategy for a batch of default-domain events.
pub fn event_batch(max_events: usize) -> impl Strategy<Value = Vec<Vec<i64>>> {
    proptest::collection::vec(well_formed_event(1, 39, 5), 0..max_events)
}

/// Strategy for a binary matrix with up to `max_rows` rows of `width` columns.
pub fn binary_matrix(max_rows: usize, width: usize) -> impl Strategy<Value = Array2<u8>> {
    (0..max_rows).prop_flat_map(move |rows| {
        proptest::collection::vec(0u8..=1, rows * width).prop_map(move |data| {
            Array2::from_shape_vec((rows, width), data).expect("shape matches data length")
        })
    })
}

/// Strategy for an integer matrix with entries of either sign.
pub fn integer_matrix(max_rows: usize, max_cols: usize) -> impl Strategy<Value = Array2<i64>> {
    (0..max_rows, 0..max_cols).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(any::<i64>(), rows * cols).prop_map(move |data| {
            Array2::from_shape_vec((rows, cols), data).expect("shape matches data length")
        })
    })
}
