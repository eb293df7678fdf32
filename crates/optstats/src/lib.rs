//! # optstats
//!
//! Cardinality and selectivity estimation primitives for cost-based query
//! optimizers.
//!
//! A statistics derivation pass walks a plan bottom-up and, for each
//! expression, builds a [`Statistics`] value: how many rows the expression
//! returns and how many distinct values the interesting column sets take.
//! This crate supplies those values and the operations that keep them
//! consistent as predicates are folded in. Deciding which column sets matter,
//! walking the plan and costing it are left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use optstats::{Cardinality, ColSet, ColumnStatistic, ColumnStatisticsMap, Statistics};
//!
//! // Scan of a 1000-row table with 100 distinct values in column 1.
//! let mut scan: Statistics = Statistics::new();
//! if !scan.init(&Cardinality::ANY) {
//!     scan.set_row_count(1000.0);
//! }
//! scan.col_stats.insert(ColumnStatistic::new(ColSet::single(1u32), 100.0))?;
//!
//! // A filter on top starts from a copy of its input.
//! let mut filter = scan.copy();
//! let input_rows = filter.row_count();
//! if let Some(stat) = filter.col_stats.lookup_mut(&ColSet::single(1u32)) {
//!     stat.apply_selectivity(0.5, input_rows);
//! }
//! filter.apply_selectivity(0.5);
//!
//! assert_eq!(scan.to_string(), "[rows=1000, distinct(1)=100]");
//! assert_eq!(filter.to_string(), "[rows=500, distinct(1)=99.9023438]");
//! assert_eq!(filter.col_stats.count(), 1);
//! # Ok::<(), optstats::Error>(())
//! ```

// Re-export the estimation API
pub use optstats_core::statistics::{
    Cardinality, CardinalityBound, ColStatsMap, ColumnStatistic, ColumnStatisticsMap, Statistics,
    canonical_cmp, colset_cmp, sorted_column_statistics,
};
pub use optstats_core::{FormatConfig, format::format_general};

// Re-export foundation types - you'll need these to name columns
pub use optstats_common::utils::validate::{
    validate_distinct_count, validate_row_count, validate_selectivity,
};
pub use optstats_common::{ColSet, ColumnId, Error, Result};
