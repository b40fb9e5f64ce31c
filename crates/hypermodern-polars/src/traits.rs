//! Extension traits for point statistics on Polars DataFrames

use crate::{Result, SummaryOptions};
use hypermodern_core::AnalysisResult;

/// Extension trait for summarising labelled points held in a DataFrame
pub trait PointStatsExt {
    /// Summarise the point columns named in `options`
    ///
    /// # Arguments
    /// * `options` - Column names and label ordering
    ///
    /// # Returns
    /// The summary; statistics without a defined value are `None`
    ///
    /// # Errors
    /// * [`crate::Error::InvalidColumn`] if a named column is missing
    /// * [`crate::Error::TypeMismatch`] if a coordinate column is not numeric
    ///   or the label column is not a string column
    /// * [`crate::Error::InvalidInput`] if any cell is null
    fn point_summary(&self, options: &SummaryOptions) -> Result<AnalysisResult>;

    /// Extract a coordinate column as `f64` values, casting integer and
    /// `f32` columns
    fn numeric_values(&self, column: &str) -> Result<Vec<f64>>;
}
