use std::fmt;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Range bound: inclusive [low, high] on one numeric column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBound {
    pub low: f64,
    pub high: f64,
}

impl RangeBound {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive on both ends. An inverted bound (`low > high`) contains nothing.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.low, self.high)
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of rows whose values pass every `(column, bound)` pair.
///
/// A row passes a constraint when:
/// * the column exists and holds a numeric cell, and
/// * `low <= value <= high`.
///
/// A missing or non-numeric column matches no rows. An empty constraint list
/// keeps every row.
pub fn filtered_indices(dataset: &Dataset, constraints: &[(&str, RangeBound)]) -> Vec<usize> {
    let resolved: Option<Vec<(usize, RangeBound)>> = constraints
        .iter()
        .map(|(col, bound)| {
            dataset
                .column_index(col)
                .filter(|&i| dataset.columns[i].kind.is_numeric())
                .map(|i| (i, *bound))
        })
        .collect();
    let Some(resolved) = resolved else {
        return Vec::new();
    };

    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            resolved.iter().all(|(col, bound)| {
                row.get(*col)
                    .and_then(|cell| cell.as_f64())
                    .is_some_and(|v| bound.contains(v))
            })
        })
        .map(|(i, _)| i)
        .collect()
}

/// Rows of `dataset` with `low <= row[column] <= high`, original order kept.
pub fn filter_range(dataset: &Dataset, column: &str, bound: RangeBound) -> Dataset {
    dataset.select_rows(&filtered_indices(dataset, &[(column, bound)]))
}

/// Logical AND of several range constraints, applied one after another.
pub fn filter_ranges(dataset: &Dataset, constraints: &[(&str, RangeBound)]) -> Dataset {
    constraints
        .iter()
        .fold(dataset.clone(), |acc, (column, bound)| filter_range(&acc, column, *bound))
}
