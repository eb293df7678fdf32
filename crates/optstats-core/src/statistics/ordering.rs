//! Canonical order over column statistics.
//!
//! Smaller column sets come first; sets of equal size compare column by
//! column in ascending id order. Statistics on one expression never share a
//! column set, so this is a total order over them and any sort yields the
//! same sequence regardless of insertion order.

use super::col_stats_map::ColumnStatisticsMap;
use super::column::ColumnStatistic;
use optstats_common::types::ColSet;
use std::cmp::Ordering;

/// Compares two column sets by size, then by their ascending ids.
#[must_use]
pub fn colset_cmp(a: &ColSet, b: &ColSet) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.as_slice().cmp(b.as_slice()))
}

/// Compares two column statistics by their column sets.
#[must_use]
pub fn canonical_cmp(a: &ColumnStatistic, b: &ColumnStatistic) -> Ordering {
    colset_cmp(&a.cols, &b.cols)
}

/// Returns the statistics of `map` in canonical order.
#[must_use]
pub fn sorted_column_statistics<M: ColumnStatisticsMap>(map: &M) -> Vec<&ColumnStatistic> {
    let mut stats: Vec<&ColumnStatistic> = map.iter().collect();
    stats.sort_by(|a, b| canonical_cmp(a, b));
    stats
}
