//! Collections of column statistics keyed by column set.

use super::column::ColumnStatistic;
use indexmap::IndexMap;
use indexmap::map::Entry;
use optstats_common::types::ColSet;
use optstats_common::utils::error::{Error, Result};

/// The capability [`Statistics`](super::Statistics) needs from its column
/// statistics container: a count, stable positional access, and a deep copy.
///
/// How entries get inserted, looked up or evicted is up to the container.
pub trait ColumnStatisticsMap: Clone {
    /// Returns the number of statistics.
    fn count(&self) -> usize;

    /// Returns the statistic at position `i`. Panics if out of range.
    fn get(&self, i: usize) -> &ColumnStatistic;

    /// Returns the statistic at position `i` mutably. Panics if out of range.
    fn get_mut(&mut self, i: usize) -> &mut ColumnStatistic;

    /// Returns a copy that shares nothing with `self`.
    #[must_use]
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Iterates the statistics by position.
    fn iter(&self) -> impl Iterator<Item = &ColumnStatistic> {
        (0..self.count()).map(move |i| self.get(i))
    }
}

/// Default column statistics container.
///
/// Keeps insertion order, so positions stay stable until an entry is
/// removed. Each column set appears at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColStatsMap {
    stats: IndexMap<ColSet, ColumnStatistic>,
}

impl ColStatsMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the statistic for `cols`, creating one with a zero distinct
    /// count if missing. The flag is true when a new entry was added.
    pub fn add(&mut self, cols: &ColSet) -> (&mut ColumnStatistic, bool) {
        match self.stats.entry(cols.clone()) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => {
                let stat = ColumnStatistic::new(cols.clone(), 0.0);
                (entry.insert(stat), true)
            }
        }
    }

    /// Inserts a fully built statistic. Fails if its column set is taken.
    pub fn insert(&mut self, stat: ColumnStatistic) -> Result<()> {
        match self.stats.entry(stat.cols.clone()) {
            Entry::Occupied(entry) => Err(Error::DuplicateColumnSet(entry.key().to_string())),
            Entry::Vacant(entry) => {
                entry.insert(stat);
                Ok(())
            }
        }
    }

    /// Looks up the statistic for exactly `cols`.
    #[must_use]
    pub fn lookup(&self, cols: &ColSet) -> Option<&ColumnStatistic> {
        self.stats.get(cols)
    }

    /// Looks up the statistic for exactly `cols` mutably.
    pub fn lookup_mut(&mut self, cols: &ColSet) -> Option<&mut ColumnStatistic> {
        self.stats.get_mut(cols)
    }

    /// Removes the statistic for `cols`, keeping the order of the rest.
    pub fn remove(&mut self, cols: &ColSet) -> Option<ColumnStatistic> {
        self.stats.shift_remove(cols)
    }

    /// Removes every statistic.
    pub fn clear(&mut self) {
        self.stats.clear();
    }

    /// Returns true if the map holds no statistics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

impl ColumnStatisticsMap for ColStatsMap {
    fn count(&self) -> usize {
        self.stats.len()
    }

    fn get(&self, i: usize) -> &ColumnStatistic {
        &self.stats[i]
    }

    fn get_mut(&mut self, i: usize) -> &mut ColumnStatistic {
        &mut self.stats[i]
    }
}

impl FromIterator<ColumnStatistic> for ColStatsMap {
    /// Later statistics for an already seen column set replace earlier ones.
    fn from_iter<I: IntoIterator<Item = ColumnStatistic>>(iter: I) -> Self {
        let stats = iter
            .into_iter()
            .map(|stat| (stat.cols.clone(), stat))
            .collect();
        Self { stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(ids: &[u32]) -> ColSet {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_add_creates_once() {
        let mut map = ColStatsMap::new();
        let (stat, added) = map.add(&cols(&[1]));
        assert!(added);
        stat.set_distinct_count(7.0);

        let (stat, added) = map.add(&cols(&[1]));
        assert!(!added);
        assert_eq!(stat.distinct_count(), 7.0);
        assert_eq!(map.count(), 1);
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut map = ColStatsMap::new();
        map.insert(ColumnStatistic::new(cols(&[1, 2]), 4.0)).unwrap();
        let err = map
            .insert(ColumnStatistic::new(cols(&[2, 1]), 5.0))
            .unwrap_err();
        assert_eq!(err, Error::DuplicateColumnSet("(1,2)".to_string()));
        assert_eq!(map.lookup(&cols(&[1, 2])).unwrap().distinct_count(), 4.0);
    }

    #[test]
    fn test_positional_access_follows_insertion() {
        let mut map = ColStatsMap::new();
        map.add(&cols(&[3]));
        map.add(&cols(&[1]));
        map.add(&cols(&[2]));
        let order: Vec<String> = map.iter().map(|s| s.cols.to_string()).collect();
        assert_eq!(order, vec!["(3)", "(1)", "(2)"]);

        map.get_mut(1).set_distinct_count(9.0);
        assert_eq!(map.lookup(&cols(&[1])).unwrap().distinct_count(), 9.0);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut map: ColStatsMap = [
            ColumnStatistic::new(cols(&[1]), 1.0),
            ColumnStatistic::new(cols(&[2]), 2.0),
            ColumnStatistic::new(cols(&[3]), 3.0),
        ]
        .into_iter()
        .collect();

        let removed = map.remove(&cols(&[2])).unwrap();
        assert_eq!(removed.distinct_count(), 2.0);
        assert_eq!(map.get(1).cols, cols(&[3]));
        assert!(map.lookup(&cols(&[2])).is_none());

        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn test_copy_is_deep() {
        let mut original = ColStatsMap::new();
        original.add(&cols(&[1])).0.set_distinct_count(10.0);

        let mut copy = original.copy();
        copy.get_mut(0).set_distinct_count(1.0);
        copy.add(&cols(&[2]));

        assert_eq!(original.count(), 1);
        assert_eq!(original.get(0).distinct_count(), 10.0);
        assert_eq!(original.get(0).cols, cols(&[1]));
    }
}
