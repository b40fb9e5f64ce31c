//! Columnar view over a batch of points

use crate::{PointColumns, Result};
use hypermodern_core::DataPoint;
use polars::prelude::*;

/// Build a DataFrame with one row per point, in input order
pub fn points_to_frame(points: &[DataPoint]) -> Result<DataFrame> {
    points_to_frame_with(points, &PointColumns::default())
}

/// Like [`points_to_frame`], with custom column names
pub fn points_to_frame_with(points: &[DataPoint], columns: &PointColumns) -> Result<DataFrame> {
    let x: Vec<f64> = points.iter().map(|p| p.x).collect();
    let y: Vec<f64> = points.iter().map(|p| p.y).collect();
    let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();

    let df = DataFrame::new(vec![
        Series::new(PlSmallStr::from(columns.x.as_str()), x).into(),
        Series::new(PlSmallStr::from(columns.y.as_str()), y).into(),
        Series::new(PlSmallStr::from(columns.label.as_str()), labels).into(),
    ])?;

    Ok(df)
}
