//! Per-expression statistics.

use super::cardinality::CardinalityBound;
use super::col_stats_map::{ColStatsMap, ColumnStatisticsMap};
use super::ordering::sorted_column_statistics;
use crate::config::FormatConfig;
use crate::format::format_general;
use std::fmt;

/// Estimates the coster uses to compare plans for one relational expression.
///
/// The row count is derived bottom-up for every expression. Column
/// statistics are derived lazily, only for the column sets that affect the
/// row count of this expression or of a parent. For `SELECT y FROM a WHERE
/// x = 1`, only `x` influences the selectivity of the filter, so a statistic
/// is kept for `x` but not for `y`.
///
/// Statistics are owned by the expression they describe. When a parent
/// starts from a child's estimate it takes a [`copy`](Self::copy), so later
/// changes on either side never leak to the other.
///
/// # Example
///
/// ```
/// use optstats_core::statistics::{ColumnStatistic, Statistics};
///
/// let mut stats: Statistics = Statistics::with_row_count(1000.0);
/// stats
///     .col_stats
///     .insert(ColumnStatistic::new([1u32].into_iter().collect(), 100.0))?;
///
/// stats.apply_selectivity(0.5);
/// assert_eq!(stats.row_count(), 500.0);
/// assert_eq!(stats.to_string(), "[rows=500, distinct(1)=100]");
/// # Ok::<(), optstats_common::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics<M: ColumnStatisticsMap = ColStatsMap> {
    /// Estimated number of rows returned by the expression.
    ///
    /// Without table statistics the scale of this number is arbitrary, so it
    /// should be read relatively: 0.001 rows is a thousand times better than
    /// 1 row, even though both round to "about one row".
    row_count: f64,

    /// Statistics for sets of columns of the expression.
    pub col_stats: M,

    /// Product of all selectivities applied so far, between 0 and 1.
    selectivity: f64,
}

impl<M: ColumnStatisticsMap + Default> Statistics<M> {
    /// Creates statistics with no rows, no column statistics and a
    /// selectivity of 1.
    #[must_use]
    pub fn new() -> Self {
        Self::with_row_count(0.0)
    }

    /// Creates statistics with the given row count.
    #[must_use]
    pub fn with_row_count(row_count: f64) -> Self {
        Self::from_parts(row_count, 1.0, M::default())
    }
}

impl<M: ColumnStatisticsMap + Default> Default for Statistics<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ColumnStatisticsMap> Statistics<M> {
    /// Creates statistics from their raw parts.
    #[must_use]
    pub fn from_parts(row_count: f64, selectivity: f64, col_stats: M) -> Self {
        debug_assert!(row_count >= 0.0, "negative row count {row_count}");
        debug_assert!(
            (0.0..=1.0).contains(&selectivity),
            "selectivity {selectivity} outside [0, 1]"
        );
        Self {
            row_count,
            col_stats,
            selectivity,
        }
    }

    /// Returns a copy that shares nothing with `self`.
    #[must_use]
    pub fn copy(&self) -> Self {
        Self {
            row_count: self.row_count,
            col_stats: self.col_stats.copy(),
            selectivity: self.selectivity,
        }
    }

    /// Returns the estimated row count.
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> f64 {
        self.row_count
    }

    /// Overwrites the estimated row count.
    ///
    /// Distinct counts are not re-clamped; use
    /// [`clamp_distinct_counts`](Self::clamp_distinct_counts) after lowering it.
    pub fn set_row_count(&mut self, row_count: f64) {
        debug_assert!(row_count >= 0.0, "negative row count {row_count}");
        self.row_count = row_count;
    }

    /// Returns the cumulative selectivity.
    #[inline]
    #[must_use]
    pub fn selectivity(&self) -> f64 {
        self.selectivity
    }

    /// Overwrites the cumulative selectivity.
    pub fn set_selectivity(&mut self, selectivity: f64) {
        debug_assert!(
            (0.0..=1.0).contains(&selectivity),
            "selectivity {selectivity} outside [0, 1]"
        );
        self.selectivity = selectivity;
    }

    /// Starts the estimate from a cardinality bound.
    ///
    /// If the bound proves the expression empty, the row count and
    /// selectivity become 0 and `true` is returned; nothing else needs to be
    /// derived. Otherwise only the selectivity is reset to 1 and `false` is
    /// returned. The row count is left as it was: it must be set separately
    /// with [`set_row_count`](Self::set_row_count) before it means anything.
    pub fn init(&mut self, bound: &impl CardinalityBound) -> bool {
        if bound.is_zero() {
            tracing::trace!("cardinality bound is zero, estimate is empty");
            self.row_count = 0.0;
            self.selectivity = 0.0;
            return true;
        }
        self.selectivity = 1.0;
        false
    }

    /// Applies an operator of the given selectivity to the estimate.
    ///
    /// The row count and the cumulative selectivity are multiplied by
    /// `selectivity`, and every distinct count is capped at the new row
    /// count. Distinct counts are otherwise unchanged; see
    /// [`ColumnStatistic::apply_selectivity`](super::ColumnStatistic::apply_selectivity)
    /// for scaling them.
    ///
    /// A selectivity of 0 sets the row count and every distinct count to
    /// exactly 0.
    pub fn apply_selectivity(&mut self, selectivity: f64) {
        debug_assert!(
            (0.0..=1.0).contains(&selectivity),
            "selectivity {selectivity} outside [0, 1]"
        );

        if selectivity == 0.0 {
            tracing::trace!("zero selectivity, clearing row and distinct counts");
            self.row_count = 0.0;
            for i in 0..self.col_stats.count() {
                self.col_stats.get_mut(i).set_distinct_count(0.0);
            }
            return;
        }

        self.row_count *= selectivity;
        self.selectivity *= selectivity;
        self.clamp_distinct_counts();
    }

    /// Caps every distinct count at the current row count.
    pub fn clamp_distinct_counts(&mut self) {
        let row_count = self.row_count;
        for i in 0..self.col_stats.count() {
            self.col_stats.get_mut(i).clamp_to(row_count);
        }
    }

    /// Renders the canonical text form, e.g.
    /// `[rows=42, distinct(1)=3, distinct(2)=5]`.
    ///
    /// Counts use 9 significant digits and column statistics appear in
    /// canonical order, so equal estimates always render identically.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&FormatConfig::default())
    }

    /// Renders with a custom number of significant digits.
    #[must_use]
    pub fn render_with(&self, config: &FormatConfig) -> String {
        let digits = config.significant_digits;
        let mut out = format!("[rows={}", format_general(self.row_count, digits));
        for stat in sorted_column_statistics(&self.col_stats) {
            out.push_str(", distinct");
            out.push_str(&stat.cols.to_string());
            out.push('=');
            out.push_str(&format_general(stat.distinct_count(), digits));
        }
        out.push(']');
        out
    }
}

impl<M: ColumnStatisticsMap> fmt::Display for Statistics<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
