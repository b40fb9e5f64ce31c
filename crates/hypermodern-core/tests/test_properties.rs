//! Property-based tests for the point summary

mod common;

use approx::assert_relative_eq;
use common::{linear_points, points_strategy, wide_points_strategy, EPSILON};
use hypermodern_core::{AnalysisResult, DataPoint, LabelOrder};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn test_linear_relationships() {
    let rising = AnalysisResult::from_points(&linear_points(10, 2.5, -1.0), LabelOrder::Sorted);
    assert_relative_eq!(rising.correlation.unwrap(), 1.0, epsilon = EPSILON);
    assert_eq!(rising.unique_labels, vec!["even", "odd"]);

    let falling = AnalysisResult::from_points(&linear_points(10, -0.5, 3.0), LabelOrder::Sorted);
    assert_relative_eq!(falling.correlation.unwrap(), -1.0, epsilon = EPSILON);
}

#[test]
fn test_extreme_magnitudes_stay_defined() {
    let points = vec![
        DataPoint::new(f64::MAX, 1.0, "A"),
        DataPoint::new(-f64::MAX, 2.0, "B"),
    ];
    let result = AnalysisResult::from_points(&points, LabelOrder::FirstSeen);
    assert_eq!(result.mean_x, Some(0.0));
    assert_relative_eq!(result.correlation.unwrap(), -1.0, epsilon = EPSILON);

    let points = vec![DataPoint::new(1e200, 1.0, "A"), DataPoint::new(-1e200, 2.0, "B")];
    let result = AnalysisResult::from_points(&points, LabelOrder::FirstSeen);
    assert_eq!(result.mean_x, Some(0.0));
    assert_relative_eq!(
        result.std_x.unwrap(),
        std::f64::consts::SQRT_2 * 1e200,
        max_relative = 1e-12
    );
    assert_relative_eq!(result.correlation.unwrap(), -1.0, epsilon = EPSILON);
}

#[test]
fn test_flat_line_has_no_correlation() {
    let flat = AnalysisResult::from_points(&linear_points(6, 0.0, 7.0), LabelOrder::FirstSeen);
    assert_eq!(flat.correlation, None);
    assert_eq!(flat.std_y, Some(0.0));
    assert!(flat.std_x.unwrap() > 0.0);
}

proptest! {
    #[test]
    fn prop_count_matches_input(points in points_strategy(64)) {
        let result = AnalysisResult::from_points(&points, LabelOrder::FirstSeen);
        prop_assert_eq!(result.count, points.len());
    }

    #[test]
    fn prop_mean_is_sum_over_n(points in points_strategy(64)) {
        prop_assume!(!points.is_empty());
        let n = points.len() as f64;
        let expected_x = points.iter().map(|p| p.x).sum::<f64>() / n;
        let expected_y = points.iter().map(|p| p.y).sum::<f64>() / n;

        let result = AnalysisResult::from_points(&points, LabelOrder::FirstSeen);
        let mean_x = result.mean_x.unwrap();
        let mean_y = result.mean_y.unwrap();
        prop_assert!((mean_x - expected_x).abs() <= 1e-6, "{} vs {}", mean_x, expected_x);
        prop_assert!((mean_y - expected_y).abs() <= 1e-6, "{} vs {}", mean_y, expected_y);
    }

    #[test]
    fn prop_undefined_statistics_are_none(points in points_strategy(3)) {
        let result = AnalysisResult::from_points(&points, LabelOrder::FirstSeen);
        if points.is_empty() {
            prop_assert!(result.mean_x.is_none() && result.mean_y.is_none());
        }
        if points.len() < 2 {
            prop_assert!(result.std_x.is_none() && result.std_y.is_none());
            prop_assert!(result.correlation.is_none());
        }
    }

    #[test]
    fn prop_no_non_finite_values(points in points_strategy(64)) {
        let result = AnalysisResult::from_points(&points, LabelOrder::FirstSeen);
        let stats = [
            result.mean_x,
            result.mean_y,
            result.std_x,
            result.std_y,
            result.correlation,
        ];
        for value in stats.into_iter().flatten() {
            prop_assert!(value.is_finite());
        }
        if let Some(r) = result.correlation {
            prop_assert!((-1.0..=1.0).contains(&r));
        }
    }

    #[test]
    fn prop_unique_labels_match_input_set(points in points_strategy(64)) {
        let result = AnalysisResult::from_points(&points, LabelOrder::FirstSeen);
        let expected: HashSet<&str> = points.iter().map(|p| p.label.as_str()).collect();
        let actual: HashSet<&str> = result.unique_labels.iter().map(String::as_str).collect();

        prop_assert_eq!(actual.len(), result.unique_labels.len());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_wide_range_statistics_defined(points in wide_points_strategy(32)) {
        let result = AnalysisResult::from_points(&points, LabelOrder::FirstSeen);
        prop_assert_eq!(result.count, points.len());

        if !points.is_empty() {
            prop_assert!(result.mean_x.is_some() && result.mean_y.is_some());
        }
        if points.len() >= 2 {
            prop_assert!(result.std_x.is_some() && result.std_y.is_some());
        }

        for value in [result.mean_x, result.mean_y, result.std_x, result.std_y]
            .into_iter()
            .flatten()
        {
            prop_assert!(value.is_finite());
        }
        if let Some(r) = result.correlation {
            prop_assert!((-1.0..=1.0).contains(&r));
        }
    }
}
