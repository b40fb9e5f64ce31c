//! Point summary over a DataFrame

use crate::{Error, PointStatsExt, Result, SummaryOptions};
use hypermodern_core::AnalysisResult;
use polars::prelude::*;

fn lookup<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))
}

fn reject_nulls(name: &str, null_count: usize) -> Result<()> {
    if null_count > 0 {
        return Err(Error::InvalidInput(format!(
            "column '{name}' contains {null_count} null value(s)"
        )));
    }
    Ok(())
}

impl PointStatsExt for DataFrame {
    fn point_summary(&self, options: &SummaryOptions) -> Result<AnalysisResult> {
        let columns = &options.columns;

        let x = self.numeric_values(&columns.x)?;
        let y = self.numeric_values(&columns.y)?;

        let label_column = lookup(self, &columns.label)?;
        let labels = match label_column.dtype() {
            DataType::String => label_column.str()?,
            dt => {
                return Err(Error::TypeMismatch {
                    column: columns.label.clone(),
                    expected: "string".to_string(),
                    got: format!("{:?}", dt),
                });
            }
        };
        reject_nulls(&columns.label, labels.null_count())?;

        let summary =
            AnalysisResult::from_columns(&x, &y, labels.into_no_null_iter(), options.label_order)?;
        Ok(summary)
    }

    fn numeric_values(&self, name: &str) -> Result<Vec<f64>> {
        let column = lookup(self, name)?;

        // Process based on data type
        let converted;
        let column = match column.dtype() {
            DataType::Float64 => column,
            DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::UInt64
            | DataType::UInt32 => {
                converted = column.cast(&DataType::Float64)?;
                &converted
            }
            dt => {
                return Err(Error::TypeMismatch {
                    column: name.to_string(),
                    expected: "numeric".to_string(),
                    got: format!("{:?}", dt),
                });
            }
        };

        let ca = column.f64()?;
        reject_nulls(name, ca.null_count())?;

        // A single contiguous chunk is copied in one go
        match ca.cont_slice() {
            Ok(slice) => Ok(slice.to_vec()),
            Err(_) => Ok(ca.into_no_null_iter().collect()),
        }
    }
}
