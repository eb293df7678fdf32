//! Per-column-set statistics.

use optstats_common::types::ColSet;
use serde::{Deserialize, Serialize};

/// Statistics that apply jointly to a set of columns.
///
/// A table could in theory carry one of these for every subset of its
/// columns. In practice only the sets that show up in predicates, grouping
/// keys and join conditions are worth tracking, and the derivation pass
/// decides which ones those are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistic {
    /// The columns summarized by this statistic. Never empty.
    pub cols: ColSet,

    /// Estimated number of distinct value combinations of `cols` among the
    /// rows of the owning expression.
    distinct_count: f64,
}

impl ColumnStatistic {
    /// Creates a statistic over `cols`.
    #[must_use]
    pub fn new(cols: ColSet, distinct_count: f64) -> Self {
        debug_assert!(!cols.is_empty(), "column statistic over an empty set");
        debug_assert!(
            distinct_count >= 0.0,
            "negative distinct count {distinct_count}"
        );
        Self {
            cols,
            distinct_count,
        }
    }

    /// Returns an independent copy, including its column set.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns the estimated distinct count.
    #[inline]
    #[must_use]
    pub fn distinct_count(&self) -> f64 {
        self.distinct_count
    }

    /// Overwrites the distinct count.
    ///
    /// This does not re-check the count against the owning expression's row
    /// count; callers that raise it must clamp it themselves.
    pub fn set_distinct_count(&mut self, distinct_count: f64) {
        debug_assert!(
            distinct_count >= 0.0,
            "negative distinct count {distinct_count}"
        );
        self.distinct_count = distinct_count;
    }

    /// Lowers the distinct count to `row_count` if it exceeds it.
    pub fn clamp_to(&mut self, row_count: f64) {
        if self.distinct_count > row_count {
            self.distinct_count = row_count;
        }
    }

    /// Updates the distinct count for a filter of the given selectivity
    /// applied to `input_rows` rows.
    ///
    /// Each of the `d` distinct values is assumed to appear `n/d` times, and
    /// each row to be dropped independently with probability `1 - s`. A value
    /// disappears when all of its rows are dropped, which happens with
    /// probability `(1 - s)^(n/d)`, so `d * (1 - s)^(n/d)` values are expected
    /// to vanish. The result is `d * s` when every row is distinct and stays
    /// close to `d` when `d` is much smaller than `n`.
    ///
    /// The row count of the owning expression is not touched.
    pub fn apply_selectivity(&mut self, selectivity: f64, input_rows: f64) {
        debug_assert!(
            (0.0..=1.0).contains(&selectivity),
            "selectivity {selectivity} outside [0, 1]"
        );
        debug_assert!(input_rows >= 0.0, "negative input rows {input_rows}");

        if selectivity == 1.0 || self.distinct_count == 0.0 {
            return;
        }
        if selectivity == 0.0 {
            self.distinct_count = 0.0;
            return;
        }

        let n = input_rows;
        let d = self.distinct_count;
        self.distinct_count = d - d * (1.0 - selectivity).powf(n / d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(cols: &[u32], distinct_count: f64) -> ColumnStatistic {
        ColumnStatistic::new(cols.iter().copied().collect(), distinct_count)
    }

    #[test]
    fn test_selectivity_one_is_noop() {
        let mut s = stat(&[1], 100.0);
        s.apply_selectivity(1.0, 1000.0);
        assert_eq!(s.distinct_count(), 100.0);
    }

    #[test]
    fn test_zero_distinct_is_noop() {
        let mut s = stat(&[1], 0.0);
        s.apply_selectivity(0.5, 1000.0);
        assert_eq!(s.distinct_count(), 0.0);
        assert!(!s.distinct_count().is_nan());
    }

    #[test]
    fn test_selectivity_zero_clears() {
        let mut s = stat(&[1], 100.0);
        s.apply_selectivity(0.0, 1000.0);
        assert_eq!(s.distinct_count(), 0.0);
    }

    #[test]
    fn test_attenuation_formula() {
        // 100 - 100 * 0.5^(1000/100)
        let mut s = stat(&[1], 100.0);
        s.apply_selectivity(0.5, 1000.0);
        assert!((s.distinct_count() - 99.902_343_75).abs() < 1e-9);
    }

    #[test]
    fn test_all_rows_distinct_scales_linearly() {
        let mut s = stat(&[1, 2], 1000.0);
        s.apply_selectivity(0.25, 1000.0);
        assert!((s.distinct_count() - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_few_distinct_values_barely_change() {
        let mut s = stat(&[3], 2.0);
        s.apply_selectivity(0.01, 1_000_000.0);
        assert!((s.distinct_count() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_to() {
        let mut s = stat(&[1], 100.0);
        s.clamp_to(500.0);
        assert_eq!(s.distinct_count(), 100.0);
        s.clamp_to(40.0);
        assert_eq!(s.distinct_count(), 40.0);
    }

    #[test]
    fn test_copy_is_independent() {
        let original = stat(&[1, 2], 10.0);
        let mut copy = original.copy();
        copy.cols.insert(3u32);
        copy.set_distinct_count(3.0);
        assert_eq!(original.cols.len(), 2);
        assert_eq!(original.distinct_count(), 10.0);
    }
}
