use std::fmt;

use itertools::Itertools;

use super::range::{Range, gaps};

/// Sorted, possibly overlapping, collection of ranges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiRange {
    ranges: Vec<Range>,
}

impl MultiRange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert keeping the ranges sorted
    pub fn add_range(&mut self, range: Range) {
        let at = self.ranges.partition_point(|r| r <= &range);
        self.ranges.insert(at, range);
    }

    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    /// Every integer of every member, in member order
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.ranges.iter().flat_map(Range::iter)
    }

    /// Sum of member lengths; overlaps count twice
    pub fn len(&self) -> i64 {
        self.ranges.iter().map(Range::length).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn gaps(&self) -> Vec<Range> {
        gaps(&self.ranges)
    }

    /// From the lowest first element to the highest last element
    pub fn full_range(&self) -> Option<Range> {
        let first = self.ranges.first()?.first();
        let last = self.ranges.iter().map(Range::last).max()?;
        Range::from_bounds(first, last)
    }

    pub fn min(&self) -> Option<i64> {
        self.ranges.first().map(Range::first)
    }
}

impl FromIterator<Range> for MultiRange {
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        let mut ranges: Vec<Range> = iter.into_iter().collect();
        ranges.sort();
        Self { ranges }
    }
}

impl fmt::Display for MultiRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MultiRange[{}]", self.ranges.iter().join(", "))
    }
}
