use std::fmt;

use anyhow::{Context, anyhow, bail};
use itertools::Itertools;
use tracing::{debug, trace};

use super::multi_range::MultiRange;
use super::range::{DOMAIN_MAX, DOMAIN_MIN, Range, gaps};

/// Moves every value of `source` by `offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RangeMap {
    source: Range,
    offset: i64,
}

impl RangeMap {
    pub fn new(source: Range, offset: i64) -> Self {
        Self { source, offset }
    }

    pub fn identity(source: Range) -> Self {
        Self::new(source, 0)
    }

    /// Parse `destination source length`
    pub fn from_line(line: &str) -> anyhow::Result<Self> {
        let (dest, src, len) = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<i64>()
                    .with_context(|| format!("'{}' is not an integer", token))
            })
            .collect_tuple()
            .ok_or_else(|| anyhow!("expected 'destination source length', found '{}'", line))?;
        let (dest, src, len) = (dest?, src?, len?);

        let source = Range::try_new(src, len)
            .ok_or_else(|| anyhow!("mapping length must be positive, found {}", len))?;
        let destination = Range::try_new(dest, len)
            .ok_or_else(|| anyhow!("mapping length must be positive, found {}", len))?;
        for range in [source, destination] {
            if range.first() < DOMAIN_MIN || range.last() > DOMAIN_MAX {
                bail!("{} is outside [{}, {}]", range, DOMAIN_MIN, DOMAIN_MAX);
            }
        }

        Ok(Self::new(source, dest - src))
    }

    pub fn source(&self) -> Range {
        self.source
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Caller guarantees `range` lies within the source
    pub fn map_range(&self, range: Range) -> Range {
        range.shifted(self.offset)
    }
}

impl fmt::Display for RangeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RangeMap[s:{} --> o:{}]", self.source, self.offset)
    }
}

/// One named stage of the pipeline
///
/// Values covered by no source, whether between sources or outside their
/// span, map to themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiRangeMap {
    name: String,
    range_maps: Vec<RangeMap>,
    full_range: Option<Range>,
    gaps: Vec<Range>,
}

impl MultiRangeMap {
    pub fn new(name: impl Into<String>, mut range_maps: Vec<RangeMap>) -> Self {
        range_maps.sort();
        let sources: Vec<Range> = range_maps.iter().map(RangeMap::source).collect();
        let full_range = sources.iter().map(Range::last).max().and_then(|last| {
            let first = sources.first()?.first();
            Range::from_bounds(first, last)
        });
        let gaps = gaps(&sources);

        Self {
            name: name.into(),
            range_maps,
            full_range,
            gaps,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range_maps(&self) -> &[RangeMap] {
        &self.range_maps
    }

    /// Span from the lowest source value to the highest; `None` for an empty stage
    pub fn full_range(&self) -> Option<Range> {
        self.full_range
    }

    pub fn gaps(&self) -> &[Range] {
        &self.gaps
    }

    /// The map that applies to `value`, or a synthetic identity map covering
    /// the gap or outer span around it.
    ///
    /// # Panics
    ///
    /// If `value` falls inside the stage's span yet belongs to neither a
    /// source nor a gap.
    pub fn get_map_for(&self, value: i64) -> RangeMap {
        let Some(full) = self.full_range else {
            return RangeMap::identity(Range::new(DOMAIN_MIN, DOMAIN_MAX - DOMAIN_MIN + 1));
        };

        if value < full.first() {
            return RangeMap::identity(Range::new(DOMAIN_MIN, full.first() - DOMAIN_MIN));
        }
        if value > full.last() {
            return RangeMap::identity(Range::new(full.last() + 1, DOMAIN_MAX - full.last()));
        }

        if let Some(map) = self
            .range_maps
            .iter()
            .take_while(|map| map.source.first() <= value)
            .find(|map| map.source.contains(value))
        {
            return *map;
        }

        match self.gaps.iter().find(|gap| gap.contains(value)) {
            Some(gap) => RangeMap::identity(*gap),
            None => panic!("stage {} has neither a map nor a gap for {}", self.name, value),
        }
    }

    /// Map every value of `input`, splitting ranges that cross a map boundary
    pub fn apply(&self, input: &MultiRange) -> MultiRange {
        let mut mapped = MultiRange::new();
        let mut stack: Vec<Range> = input.ranges().iter().rev().copied().collect();

        while let Some(range) = stack.pop() {
            trace!(stage = %self.name, pending = stack.len(), "popped {}", range);

            let map = self.get_map_for(range.first());
            if range.last() <= map.source.last() {
                debug!("{} fits in {}", range, map);
                mapped.add_range(map.map_range(range));
                continue;
            }

            let (fits, excess) = range.split_at(map.source.last() + 1);
            let Some(excess) = excess else {
                panic!("{} does not start inside {}", range, map);
            };
            debug!("{} does not fit in {}: mapping {}, pushing back {}", range, map, fits, excess);
            mapped.add_range(map.map_range(fits));
            stack.push(excess);
        }

        debug!(stage = %self.name, "next ranges: {}", mapped);
        mapped
    }
}

impl fmt::Display for MultiRangeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} map:", self.name)?;
        for map in &self.range_maps {
            write!(f, "\n  {}", map)?;
        }
        Ok(())
    }
}
