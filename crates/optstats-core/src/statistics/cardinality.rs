//! Cardinality bounds.
//!
//! A bound is a fact about how many rows an expression can return, derived
//! from the plan shape and schema constraints rather than from data
//! (e.g. `LIMIT 0`, or a filter on `false`). The estimator only needs to know
//! whether a bound proves the result empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that can prove an expression returns no rows.
pub trait CardinalityBound {
    /// Returns true if the expression is provably empty.
    fn is_zero(&self) -> bool;
}

/// A plain "provably empty" flag.
impl CardinalityBound for bool {
    fn is_zero(&self) -> bool {
        *self
    }
}

/// Inclusive `[min, max]` bound on the number of rows an expression returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cardinality {
    /// Lower bound.
    pub min: u32,
    /// Upper bound; `u32::MAX` means unbounded.
    pub max: u32,
}

impl Cardinality {
    /// Unbounded value used as `max` when nothing limits the row count.
    pub const MAX_VALUE: u32 = u32::MAX;

    /// Exactly zero rows.
    pub const ZERO: Cardinality = Cardinality { min: 0, max: 0 };

    /// Exactly one row.
    pub const ONE: Cardinality = Cardinality { min: 1, max: 1 };

    /// Any number of rows.
    pub const ANY: Cardinality = Cardinality {
        min: 0,
        max: Self::MAX_VALUE,
    };

    /// Creates a bound. `min` must not exceed `max`.
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        debug_assert!(min <= max, "cardinality min {min} exceeds max {max}");
        Self { min, max }
    }

    /// Returns true if the expression always returns zero rows.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.min == 0 && self.max == 0
    }

    /// Returns true if the expression always returns exactly one row.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.min == 1 && self.max == 1
    }

    /// Returns true if the expression may return zero rows.
    #[must_use]
    pub fn can_be_zero(&self) -> bool {
        self.min == 0
    }

    /// Returns true if no upper bound is known.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.max == Self::MAX_VALUE
    }

    /// Tightens this bound with another bound known to hold.
    ///
    /// Both bounds must hold for the same expression, so they always overlap.
    /// Disjoint bounds are a derivation bug: debug builds panic, release
    /// builds keep `other`, the bound supplied as the newer fact.
    #[must_use]
    pub fn intersect(&self, other: Cardinality) -> Cardinality {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        debug_assert!(min <= max, "disjoint cardinality bounds {self} and {other}");
        if min > max {
            return other;
        }
        Cardinality::new(min, max)
    }

    /// Caps the upper bound, as a `LIMIT` would.
    #[must_use]
    pub fn limit(&self, max: u32) -> Cardinality {
        Cardinality::new(self.min.min(max), self.max.min(max))
    }
}

impl Default for Cardinality {
    fn default() -> Self {
        Self::ANY
    }
}

impl CardinalityBound for Cardinality {
    fn is_zero(&self) -> bool {
        Cardinality::is_zero(self)
    }
}

/// Formats as `[0 - 10]`, or `[1 - ]` when unbounded.
impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            write!(f, "[{} - ]", self.min)
        } else {
            write!(f, "[{} - {}]", self.min, self.max)
        }
    }
}
