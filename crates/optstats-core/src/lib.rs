//! # optstats-core
//!
//! Estimation layer for optstats: the algebra that turns selectivities into
//! row counts and distinct counts for a cost-based optimizer.
//!
//! Everything here is a plain value: no I/O, no shared state, no caching.
//! Statistics move from a child expression to its parent by copy, so
//! independent subtrees can be estimated on separate threads.
//!
//! ## Modules
//!
//! - [`statistics`] - Statistics, column statistics, cardinality bounds, ordering
//! - [`format`] - `%g`-style float formatting for rendered estimates
//! - [`config`] - Rendering configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod format;
pub mod statistics;

// Re-export commonly used types
pub use config::FormatConfig;
pub use statistics::{
    Cardinality, CardinalityBound, ColStatsMap, ColumnStatistic, ColumnStatisticsMap, Statistics,
};
