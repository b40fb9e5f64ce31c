//! Core types and scalar reductions for labelled point statistics
//!
//! This crate holds the domain model shared by the analyzer and the HTTP
//! boundary, together with the column reductions the summary is built from.
//!
//! Every statistic is reported as `Option<f64>`: a value without a
//! mathematical definition for the given input (an empty column, a single
//! sample, a constant column) is `None`, never NaN.
//!
//! # Example
//!
//! ```rust
//! use hypermodern_core::{AnalysisResult, DataPoint, LabelOrder};
//!
//! let points = vec![
//!     DataPoint::new(1.0, 2.0, "A"),
//!     DataPoint::new(3.0, 4.0, "B"),
//!     DataPoint::new(5.0, 6.0, "A"),
//! ];
//!
//! let summary = AnalysisResult::from_points(&points, LabelOrder::FirstSeen);
//! assert_eq!(summary.count, 3);
//! assert_eq!(summary.mean_x, Some(3.0));
//! assert_eq!(summary.unique_labels, vec!["A", "B"]);
//! ```

pub mod correlation;
pub mod error;
pub mod labels;
pub mod moments;
pub mod types;

// Re-export core types
pub use error::{Error, Result};
pub use types::{AnalysisResult, DataPoint, LabelOrder};

pub use correlation::pearson_correlation;
pub use labels::distinct_labels;
pub use moments::{finite_or_none, mean, sample_std_dev};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
