//! Polars integration for labelled point statistics
//!
//! Points are shaped into a DataFrame with `x`, `y` and `label` columns and
//! summarised through a single extension trait. [`StatsAnalyzer`] wraps both
//! steps for callers that start from a slice of points.
//!
//! # Example
//!
//! ```rust
//! use hypermodern_core::DataPoint;
//! use hypermodern_polars::{points_to_frame, PointStatsExt, StatsAnalyzer, SummaryOptions};
//!
//! let points = vec![
//!     DataPoint::new(1.0, 2.0, "A"),
//!     DataPoint::new(3.0, 4.0, "B"),
//!     DataPoint::new(5.0, 6.0, "A"),
//! ];
//!
//! let df = points_to_frame(&points)?;
//! let summary = df.point_summary(&SummaryOptions::default())?;
//! assert_eq!(summary.mean_y, Some(4.0));
//!
//! let same = StatsAnalyzer::default().analyze(&points)?;
//! assert_eq!(same.count, 3);
//! # Ok::<(), hypermodern_polars::Error>(())
//! ```

mod analyzer;
mod config;
mod error;
mod frame;
mod methods;
mod traits;

pub use analyzer::StatsAnalyzer;
pub use config::*;
pub use error::{Error, Result};
pub use frame::{points_to_frame, points_to_frame_with};
pub use traits::*;
