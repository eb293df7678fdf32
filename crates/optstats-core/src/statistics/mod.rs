//! Row count and distinct count estimates for cost-based optimization.
//!
//! This module provides:
//! - [`Statistics`]: per-expression row count, cumulative selectivity and
//!   column statistics, with the selectivity algebra that keeps them consistent
//! - [`ColumnStatistic`]: per-column-set distinct counts and their attenuation
//!   under filters
//! - [`ColumnStatisticsMap`]: the container contract, with [`ColStatsMap`] as
//!   the default container
//! - [`CardinalityBound`] and [`Cardinality`]: provable row count bounds
//! - [`ordering`]: the canonical order used when rendering

mod cardinality;
mod col_stats_map;
mod column;
pub mod ordering;
mod stats;

pub use cardinality::{Cardinality, CardinalityBound};
pub use col_stats_map::{ColStatsMap, ColumnStatisticsMap};
pub use column::ColumnStatistic;
pub use ordering::{canonical_cmp, colset_cmp, sorted_column_statistics};
pub use stats::Statistics;
