//! Ordered sets of column identifiers.

use super::ColumnId;
use crate::utils::error::{Error, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// A set of columns over which a joint statistic is kept.
///
/// Columns are stored ascending and deduplicated, so iteration always yields
/// ids in increasing order and two sets with the same members compare equal
/// regardless of how they were built. Most sets hold a handful of columns and
/// stay inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<ColumnId>", into = "Vec<ColumnId>")]
pub struct ColSet {
    cols: SmallVec<[ColumnId; 4]>,
}

impl ColSet {
    /// Creates an empty column set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding a single column.
    #[must_use]
    pub fn single(col: impl Into<ColumnId>) -> Self {
        let mut cols = SmallVec::new();
        cols.push(col.into());
        Self { cols }
    }

    /// Builds a set from `cols`, failing if it would be empty.
    ///
    /// Column statistics are only defined over non-empty sets.
    pub fn try_non_empty<I, C>(cols: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnId>,
    {
        let set: Self = cols.into_iter().map(Into::into).collect();
        if set.is_empty() {
            return Err(Error::EmptyColumnSet);
        }
        Ok(set)
    }

    /// Adds a column. Returns `false` if it was already present.
    pub fn insert(&mut self, col: impl Into<ColumnId>) -> bool {
        let col = col.into();
        match self.cols.binary_search(&col) {
            Ok(_) => false,
            Err(pos) => {
                self.cols.insert(pos, col);
                true
            }
        }
    }

    /// Removes a column. Returns `false` if it was not present.
    pub fn remove(&mut self, col: impl Into<ColumnId>) -> bool {
        match self.cols.binary_search(&col.into()) {
            Ok(pos) => {
                self.cols.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Returns true if the set contains `col`.
    #[must_use]
    pub fn contains(&self, col: impl Into<ColumnId>) -> bool {
        self.cols.binary_search(&col.into()).is_ok()
    }

    /// Returns the number of columns in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cols.len()
    }

    /// Returns true if the set has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// Iterates the columns in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ColumnId> + '_ {
        self.cols.iter().copied()
    }

    /// Returns the columns as an ascending slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ColumnId] {
        &self.cols
    }

    /// Returns the union of two sets.
    #[must_use]
    pub fn union(&self, other: &ColSet) -> ColSet {
        let mut out = self.clone();
        for col in other.iter() {
            out.insert(col);
        }
        out
    }

    /// Returns true if every column of `self` is in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &ColSet) -> bool {
        self.iter().all(|c| other.contains(c))
    }

    /// Returns true if the sets share at least one column.
    #[must_use]
    pub fn intersects(&self, other: &ColSet) -> bool {
        self.iter().any(|c| other.contains(c))
    }
}

impl<C: Into<ColumnId>> FromIterator<C> for ColSet {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut cols: SmallVec<[ColumnId; 4]> = iter.into_iter().map(Into::into).collect();
        cols.sort_unstable();
        cols.dedup();
        Self { cols }
    }
}

impl From<Vec<ColumnId>> for ColSet {
    fn from(cols: Vec<ColumnId>) -> Self {
        cols.into_iter().collect()
    }
}

impl From<ColSet> for Vec<ColumnId> {
    fn from(set: ColSet) -> Self {
        set.cols.into_vec()
    }
}

/// Formats as `(1,2,5)`, collapsing runs of three or more consecutive ids:
/// `{0,1,2,5,6,10}` is `(0-2,5,6,10)`.
impl fmt::Display for ColSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        let mut first = true;
        let mut i = 0;
        while i < self.cols.len() {
            let start = self.cols[i].as_u32();
            let mut end = start;
            while i + 1 < self.cols.len()
                && Some(self.cols[i + 1].as_u32()) == end.checked_add(1)
            {
                end += 1;
                i += 1;
            }
            if !first {
                f.write_str(",")?;
            }
            first = false;
            if start == end {
                write!(f, "{start}")?;
            } else if end - start == 1 {
                write!(f, "{start},{end}")?;
            } else {
                write!(f, "{start}-{end}")?;
            }
            i += 1;
        }
        f.write_str(")")
    }
}
