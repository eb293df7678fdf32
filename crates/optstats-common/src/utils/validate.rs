//! Range checks for raw estimation inputs.

use super::error::{Error, Result};

/// Checks that `selectivity` is a number in `[0, 1]`.
pub fn validate_selectivity(selectivity: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&selectivity) {
        Ok(selectivity)
    } else {
        Err(Error::InvalidSelectivity(selectivity))
    }
}

/// Checks that `row_count` is a non-negative number.
pub fn validate_row_count(row_count: f64) -> Result<f64> {
    if row_count >= 0.0 {
        Ok(row_count)
    } else {
        Err(Error::NegativeRowCount(row_count))
    }
}

/// Checks that `distinct_count` is a non-negative number.
pub fn validate_distinct_count(distinct_count: f64) -> Result<f64> {
    if distinct_count >= 0.0 {
        Ok(distinct_count)
    } else {
        Err(Error::NegativeDistinctCount(distinct_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_selectivity_bounds() {
        assert_eq!(validate_selectivity(0.0), Ok(0.0));
        assert_eq!(validate_selectivity(1.0), Ok(1.0));
        assert!(validate_selectivity(1.0001).is_err());
        assert!(validate_selectivity(-0.1).is_err());
        assert!(validate_selectivity(f64::NAN).is_err());
    }

    #[test]
    fn test_counts_reject_negative_and_nan() {
        assert_eq!(validate_row_count(0.0), Ok(0.0));
        assert!(matches!(
            validate_row_count(-1.0),
            Err(Error::NegativeRowCount(_))
        ));
        assert!(validate_row_count(f64::NAN).is_err());
        assert_eq!(validate_distinct_count(12.5), Ok(12.5));
        assert!(matches!(
            validate_distinct_count(-3.0),
            Err(Error::NegativeDistinctCount(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_unit_interval_accepted(s in 0.0f64..=1.0) {
            prop_assert_eq!(validate_selectivity(s), Ok(s));
        }

        #[test]
        fn prop_above_one_rejected(s in 1.0f64..1e9) {
            prop_assume!(s > 1.0);
            prop_assert!(validate_selectivity(s).is_err());
        }
    }
}
