//! Configuration types for the point summary

pub use hypermodern_core::LabelOrder;

/// Default column holding x coordinates
pub const X_COLUMN: &str = "x";
/// Default column holding y coordinates
pub const Y_COLUMN: &str = "y";
/// Default column holding labels
pub const LABEL_COLUMN: &str = "label";

/// Names of the columns a point frame is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointColumns {
    pub x: String,
    pub y: String,
    pub label: String,
}

impl PointColumns {
    pub fn new(x: impl Into<String>, y: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            label: label.into(),
        }
    }
}

impl Default for PointColumns {
    fn default() -> Self {
        Self::new(X_COLUMN, Y_COLUMN, LABEL_COLUMN)
    }
}

/// Options controlling how a frame is summarised
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Where to find the coordinate and label columns
    pub columns: PointColumns,

    /// Order of `unique_labels` in the result
    pub label_order: LabelOrder,
}

impl SummaryOptions {
    pub fn with_label_order(mut self, label_order: LabelOrder) -> Self {
        self.label_order = label_order;
        self
    }

    pub fn with_columns(mut self, columns: PointColumns) -> Self {
        self.columns = columns;
        self
    }
}
