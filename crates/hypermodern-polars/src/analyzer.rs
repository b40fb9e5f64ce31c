//! The analyzer behind the `/analyze/` endpoint

use crate::{frame::points_to_frame_with, PointStatsExt, Result, SummaryOptions};
use hypermodern_core::{AnalysisResult, DataPoint, LabelOrder};
use tracing::{debug, instrument};

/// Summarises batches of points through a columnar view
///
/// The analyzer holds only immutable options and can be shared freely
/// between requests.
#[derive(Debug, Clone, Default)]
pub struct StatsAnalyzer {
    options: SummaryOptions,
}

impl StatsAnalyzer {
    pub fn new(options: SummaryOptions) -> Self {
        Self { options }
    }

    /// Analyzer with default columns and the given label order
    pub fn with_label_order(label_order: LabelOrder) -> Self {
        Self::new(SummaryOptions::default().with_label_order(label_order))
    }

    /// Summarise `points`
    ///
    /// An empty batch is valid and yields a count of zero with every
    /// statistic set to `None`.
    #[instrument(level = "debug", skip_all, fields(points = points.len()))]
    pub fn analyze(&self, points: &[DataPoint]) -> Result<AnalysisResult> {
        let df = points_to_frame_with(points, &self.options.columns)?;
        let summary = df.point_summary(&self.options)?;

        debug!(
            count = summary.count,
            labels = summary.unique_labels.len(),
            correlation_defined = summary.correlation.is_some(),
            "analysis complete"
        );
        Ok(summary)
    }
}
