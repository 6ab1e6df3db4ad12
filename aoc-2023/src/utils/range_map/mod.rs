//! Interval remapping
//!
//! A [`MultiRangeMap`] is one stage: a set of [`RangeMap`]s that shift their
//! source interval by a constant offset, with identity everywhere else.
//! [`MultiRangeMap::apply`] pushes a whole [`MultiRange`] through a stage
//! without enumerating its values, splitting input ranges at map boundaries.
//!
//! ```
//! use aoc_2023::utils::range_map::{MultiRange, MultiRangeMap, Range, RangeMap};
//!
//! let stage = MultiRangeMap::new("seed-to-soil", vec![
//!     RangeMap::from_line("50 98 2").unwrap(),
//!     RangeMap::from_line("52 50 48").unwrap(),
//! ]);
//! let seeds: MultiRange = [Range::new(79, 14), Range::new(55, 13)].into_iter().collect();
//!
//! let soil = stage.apply(&seeds);
//! assert_eq!(soil.ranges(), &[Range::new(57, 13), Range::new(81, 14)]);
//! ```

mod multi_range;
mod range;
mod range_map;

#[cfg(test)]
mod tests;

pub use multi_range::MultiRange;
pub use range::{DOMAIN_MAX, DOMAIN_MIN, Range, gaps};
pub use range_map::{MultiRangeMap, RangeMap};
