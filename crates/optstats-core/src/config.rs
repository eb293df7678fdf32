//! Configuration for rendering statistics.

use optstats_common::utils::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of significant digits used by the canonical rendering.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 9;

/// Largest digit count an `f64` can meaningfully carry.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Controls how [`Statistics`](crate::statistics::Statistics) are rendered.
///
/// The default is the canonical form that plan tests compare against;
/// other settings are meant for human-facing output only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Significant digits for row and distinct counts.
    pub significant_digits: usize,
}

impl FormatConfig {
    /// Creates the canonical configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }

    /// Sets the number of significant digits.
    #[must_use]
    pub fn with_significant_digits(mut self, digits: usize) -> Self {
        self.significant_digits = digits;
        self
    }

    /// Checks that the digit count is within `1..=17`.
    pub fn validate(&self) -> Result<()> {
        if (1..=MAX_SIGNIFICANT_DIGITS).contains(&self.significant_digits) {
            Ok(())
        } else {
            Err(Error::InvalidConfig(format!(
                "significant_digits must be within 1..={}, got {}",
                MAX_SIGNIFICANT_DIGITS, self.significant_digits
            )))
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_canonical() {
        let config = FormatConfig::default();
        assert_eq!(config.significant_digits, 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(FormatConfig::new().with_significant_digits(0).validate().is_err());
        assert!(FormatConfig::new().with_significant_digits(18).validate().is_err());
        assert!(FormatConfig::new().with_significant_digits(17).validate().is_ok());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: FormatConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FormatConfig::default());

        let config: FormatConfig = serde_json::from_str(r#"{"significant_digits": 4}"#).unwrap();
        assert_eq!(config.significant_digits, 4);
    }
}
