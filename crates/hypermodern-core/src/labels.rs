//! Distinct values of the categorical label column

use crate::LabelOrder;
use indexmap::IndexSet;

/// Collect each distinct label once, ordered per `order`
pub fn distinct_labels<'a, I>(labels: I, order: LabelOrder) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let seen: IndexSet<&str> = labels.into_iter().collect();
    let mut unique: Vec<String> = seen.into_iter().map(str::to_owned).collect();

    if order == LabelOrder::Sorted {
        unique.sort_unstable();
    }
    unique
}
