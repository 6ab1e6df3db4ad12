use std::fmt;

/// Smallest value the engine works with
pub const DOMAIN_MIN: i64 = -(1 << 60);
/// Largest value the engine works with
pub const DOMAIN_MAX: i64 = 1 << 60;

/// Closed integer interval `[first, first + length - 1]`, never empty
///
/// Ordering compares `first` and then `length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range {
    first: i64,
    length: i64,
}

impl Range {
    /// # Panics
    ///
    /// If `length` is not positive. Use [`Range::try_new`] for input-derived values.
    pub fn new(first: i64, length: i64) -> Self {
        Self::try_new(first, length)
            .unwrap_or_else(|| panic!("range length must be positive, got {}", length))
    }

    pub fn try_new(first: i64, length: i64) -> Option<Self> {
        (length >= 1).then_some(Self { first, length })
    }

    /// Range spanning `first..=last`
    pub fn from_bounds(first: i64, last: i64) -> Option<Self> {
        Self::try_new(first, last.checked_sub(first)?.checked_add(1)?)
    }

    /// Single-value range
    pub fn point(value: i64) -> Self {
        Self {
            first: value,
            length: 1,
        }
    }

    pub fn first(&self) -> i64 {
        self.first
    }

    pub fn last(&self) -> i64 {
        self.first + self.length - 1
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    pub fn contains(&self, value: i64) -> bool {
        self.first <= value && value <= self.last()
    }

    /// Split so that the second half starts at `value`.
    ///
    /// When `value` is outside the range, or is its first element, the range
    /// comes back whole.
    pub fn split_at(self, value: i64) -> (Range, Option<Range>) {
        if !self.contains(value) || value == self.first {
            return (self, None);
        }
        let head = Range {
            first: self.first,
            length: value - self.first,
        };
        let tail = Range {
            first: value,
            length: self.length - head.length,
        };
        (head, Some(tail))
    }

    /// Same length, moved by `offset`
    pub fn shifted(self, offset: i64) -> Range {
        Range {
            first: self.first + offset,
            length: self.length,
        }
    }

    pub fn iter(&self) -> std::ops::RangeInclusive<i64> {
        self.first..=self.last()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range[first:{}, last:{}, len:{}]",
            self.first,
            self.last(),
            self.length
        )
    }
}

impl IntoIterator for Range {
    type Item = i64;
    type IntoIter = std::ops::RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Uncovered spans between ranges sorted by `first`.
///
/// A range that reaches into (or past) its successor leaves no gap there.
pub fn gaps(sorted: &[Range]) -> Vec<Range> {
    let mut gaps = Vec::new();
    let Some((head, rest)) = sorted.split_first() else {
        return gaps;
    };

    let mut covered_to = head.last();
    for range in rest {
        if let Some(gap) = Range::from_bounds(covered_to + 1, range.first - 1) {
            gaps.push(gap);
        }
        covered_to = covered_to.max(range.last());
    }
    gaps
}
