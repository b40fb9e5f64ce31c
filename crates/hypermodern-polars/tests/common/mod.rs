//! Common test utilities for hypermodern-polars tests

#![allow(dead_code)]

use hypermodern_core::DataPoint;
use polars::prelude::*;
use proptest::prelude::*;

/// The three-point batch used throughout the service documentation
pub fn sample_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new(1.0, 2.0, "A"),
        DataPoint::new(3.0, 4.0, "B"),
        DataPoint::new(5.0, 6.0, "A"),
    ]
}

/// Helper function to create a point frame from raw columns
pub fn create_point_df(x: &[f64], y: &[f64], labels: &[&str]) -> DataFrame {
    df![
        "x" => x,
        "y" => y,
        "label" => labels,
    ]
    .unwrap()
}

/// Coordinates from moderate values up to half of `f64::MAX`
pub fn coordinate_strategy() -> impl Strategy<Value = f64> {
    use proptest::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
    prop_oneof![
        -1e6f64..1e6,
        (POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO).prop_map(|v| v / 2.0),
        prop::sample::select(vec![f64::MAX / 2.0, -f64::MAX / 2.0, 1e300, -1e300]),
    ]
}

/// Batches of points, including the empty batch
pub fn points_strategy(max_len: usize) -> impl Strategy<Value = Vec<DataPoint>> {
    let point = (
        coordinate_strategy(),
        coordinate_strategy(),
        prop::sample::select(vec!["A", "B", "C", ""]),
    )
        .prop_map(|(x, y, label)| DataPoint::new(x, y, label));
    prop::collection::vec(point, 0..max_len)
}
