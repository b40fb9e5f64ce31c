//! Shared utilities for integration tests

#![allow(dead_code)]

use hypermodern_core::DataPoint;
use proptest::prelude::*;

pub const EPSILON: f64 = 1e-9;

/// Labels drawn from a small alphabet so duplicates are common
pub fn label_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["A", "B", "C", "", "long label"]).prop_map(str::to_owned)
}

/// A single point with moderate finite coordinates
pub fn point_strategy() -> impl Strategy<Value = DataPoint> {
    (-1e6f64..1e6, -1e6f64..1e6, label_strategy())
        .prop_map(|(x, y, label)| DataPoint { x, y, label })
}

/// Any finite value halved, so every sample deviation stays representable
pub fn wide_value_strategy() -> impl Strategy<Value = f64> {
    use proptest::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
    (POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO).prop_map(|v| v / 2.0)
}

/// Points spread across the whole exponent range
pub fn wide_points_strategy(max_len: usize) -> impl Strategy<Value = Vec<DataPoint>> {
    prop::collection::vec(
        (wide_value_strategy(), wide_value_strategy(), label_strategy())
            .prop_map(|(x, y, label)| DataPoint { x, y, label }),
        0..max_len,
    )
}

/// Batches of points, including the empty batch
pub fn points_strategy(max_len: usize) -> impl Strategy<Value = Vec<DataPoint>> {
    prop::collection::vec(point_strategy(), 0..max_len)
}

/// Points on the line `y = slope * x + intercept` with distinct x values
pub fn linear_points(len: usize, slope: f64, intercept: f64) -> Vec<DataPoint> {
    (0..len)
        .map(|i| {
            let x = i as f64 + 0.5;
            DataPoint::new(x, slope * x + intercept, if i % 2 == 0 { "even" } else { "odd" })
        })
        .collect()
}
