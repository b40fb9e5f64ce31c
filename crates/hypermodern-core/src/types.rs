//! Domain types shared by the analyzer and the HTTP boundary

use crate::correlation::pearson_correlation;
use crate::labels::distinct_labels;
use crate::moments::{finite_or_none, mean, sample_std_dev};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single labelled observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl DataPoint {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }
}

/// Order in which distinct labels are reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelOrder {
    /// Order of first appearance in the input
    #[default]
    FirstSeen,
    /// Lexicographic order
    Sorted,
}

impl LabelOrder {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstSeen => "first_seen",
            Self::Sorted => "sorted",
        }
    }
}

impl fmt::Display for LabelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LabelOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first_seen" | "first-seen" => Ok(Self::FirstSeen),
            "sorted" => Ok(Self::Sorted),
            other => Err(Error::InvalidParameter(format!(
                "unknown label order '{other}', expected 'first_seen' or 'sorted'"
            ))),
        }
    }
}

/// Summary statistics for a batch of points
///
/// Every statistic without a defined value is `None` and serializes as
/// `null`. No field ever holds NaN or an infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub count: usize,
    pub mean_x: Option<f64>,
    pub mean_y: Option<f64>,
    pub std_x: Option<f64>,
    pub std_y: Option<f64>,
    pub correlation: Option<f64>,
    pub unique_labels: Vec<String>,
}

impl AnalysisResult {
    /// Result for an empty batch
    pub fn empty() -> Self {
        Self {
            count: 0,
            mean_x: None,
            mean_y: None,
            std_x: None,
            std_y: None,
            correlation: None,
            unique_labels: Vec::new(),
        }
    }

    /// Build the summary from already separated columns
    ///
    /// `x` and `y` must have the same length. Undefined statistics
    /// (empty input, a single point, zero variance) resolve to `None`.
    pub fn from_columns<'a, I>(
        x: &[f64],
        y: &[f64],
        labels: I,
        order: LabelOrder,
    ) -> crate::Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if x.len() != y.len() {
            return Err(Error::size_mismatch(x.len(), y.len(), "point columns"));
        }

        let correlation = match pearson_correlation(x, y) {
            Ok(r) => finite_or_none(r),
            Err(e) if e.is_undefined() => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            count: x.len(),
            mean_x: mean(x),
            mean_y: mean(y),
            std_x: sample_std_dev(x),
            std_y: sample_std_dev(y),
            correlation,
            unique_labels: distinct_labels(labels, order),
        })
    }

    /// Slice based summary, without going through a columnar frame
    pub fn from_points(points: &[DataPoint], order: LabelOrder) -> Self {
        let x: Vec<f64> = points.iter().map(|p| p.x).collect();
        let y: Vec<f64> = points.iter().map(|p| p.y).collect();

        // Columns are built from the same points, so lengths always agree
        Self::from_columns(&x, &y, points.iter().map(|p| p.label.as_str()), order)
            .unwrap_or_else(|_| Self::empty())
    }
}
