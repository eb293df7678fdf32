//! Error types for optstats.
//!
//! The estimation operations themselves never fail: their inputs are
//! produced by the statistics derivation pass, which is expected to hand over
//! values already in range. These errors are for callers that validate raw
//! numbers at that boundary before feeding them in.

use thiserror::Error;

/// Result type alias for optstats operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when validating estimation inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Selectivity outside `[0, 1]` or NaN.
    #[error("selectivity must be within [0, 1], got {0}")]
    InvalidSelectivity(f64),

    /// Negative or NaN row count.
    #[error("row count must be non-negative, got {0}")]
    NegativeRowCount(f64),

    /// Negative or NaN distinct count.
    #[error("distinct count must be non-negative, got {0}")]
    NegativeDistinctCount(f64),

    /// A column statistic was requested over no columns.
    #[error("column set must not be empty")]
    EmptyColumnSet,

    /// A column set already has a statistic in the collection.
    #[error("duplicate column statistic for {0}")]
    DuplicateColumnSet(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidSelectivity(1.5).to_string(),
            "selectivity must be within [0, 1], got 1.5"
        );
        assert_eq!(
            Error::DuplicateColumnSet("(1,2)".to_string()).to_string(),
            "duplicate column statistic for (1,2)"
        );
        assert_eq!(Error::EmptyColumnSet.to_string(), "column set must not be empty");
    }
}
