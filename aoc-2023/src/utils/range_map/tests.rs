use super::*;
use proptest::prelude::*;

fn stage(lines: &[&str]) -> MultiRangeMap {
    let maps = lines.iter().map(|l| RangeMap::from_line(l).unwrap()).collect();
    MultiRangeMap::new("test", maps)
}

#[test]
fn test_split_at_inside() {
    assert_eq!(
        Range::new(10, 5).split_at(12),
        (Range::new(10, 2), Some(Range::new(12, 3)))
    );
}

#[test]
fn test_split_at_first_or_outside_keeps_range() {
    assert_eq!(Range::new(10, 5).split_at(10), (Range::new(10, 5), None));
    assert_eq!(Range::new(10, 5).split_at(15), (Range::new(10, 5), None));
    assert_eq!(Range::new(10, 5).split_at(3), (Range::new(10, 5), None));
}

#[test]
fn test_split_at_last() {
    assert_eq!(
        Range::new(10, 5).split_at(14),
        (Range::new(10, 4), Some(Range::point(14)))
    );
}

#[test]
#[should_panic(expected = "range length must be positive")]
fn test_empty_range_panics() {
    Range::new(3, 0);
}

#[test]
fn test_gaps() {
    assert_eq!(gaps(&[Range::new(0, 5), Range::new(10, 3)]), vec![Range::new(5, 5)]);
    assert_eq!(gaps(&[Range::new(0, 5), Range::new(5, 3)]), vec![]);
    assert_eq!(gaps(&[Range::new(0, 5)]), vec![]);
    assert_eq!(gaps(&[]), vec![]);
}

#[test]
fn test_gaps_skip_overlaps() {
    // [0, 19] swallows [5, 7]; the only gap is before [25, ..]
    let ranges = [Range::new(0, 20), Range::new(5, 3), Range::new(25, 1)];
    assert_eq!(gaps(&ranges), vec![Range::new(20, 5)]);
}

#[test]
fn test_multi_range_stays_sorted() {
    let mut multi: MultiRange = [Range::new(30, 2), Range::new(10, 3)].into_iter().collect();
    multi.add_range(Range::new(20, 1));
    multi.add_range(Range::new(0, 4));

    assert_eq!(
        multi.ranges(),
        &[Range::new(0, 4), Range::new(10, 3), Range::new(20, 1), Range::new(30, 2)]
    );
    assert_eq!(multi.len(), 10);
    assert_eq!(multi.min(), Some(0));
    assert_eq!(multi.full_range(), Some(Range::new(0, 32)));
    assert_eq!(multi.gaps(), vec![Range::new(4, 6), Range::new(13, 7), Range::new(21, 9)]);
    assert_eq!(multi.iter().take(6).collect::<Vec<_>>(), vec![0, 1, 2, 3, 10, 11]);
}

#[test]
fn test_empty_multi_range() {
    let multi = MultiRange::new();
    assert!(multi.is_empty());
    assert_eq!(multi.len(), 0);
    assert_eq!(multi.min(), None);
    assert_eq!(multi.full_range(), None);
}

#[test]
fn test_from_line() {
    let map = RangeMap::from_line("50 98 2").unwrap();
    assert_eq!(map.source(), Range::new(98, 2));
    assert_eq!(map.offset(), -48);
    assert_eq!(map.to_string(), "RangeMap[s:Range[first:98, last:99, len:2] --> o:-48]");
}

#[test]
fn test_from_line_rejects_bad_input() {
    assert!(RangeMap::from_line("50 98").is_err());
    assert!(RangeMap::from_line("50 98 2 7").is_err());
    assert!(RangeMap::from_line("50 x 2").is_err());
    assert!(RangeMap::from_line("50 98 0").is_err());
    assert!(RangeMap::from_line(&format!("0 {} 2", DOMAIN_MAX)).is_err());
}

#[test]
fn test_get_map_for() {
    let soil = stage(&["50 98 2", "52 50 48", "0 10 5"]);
    assert_eq!(soil.full_range(), Some(Range::new(10, 90)));
    assert_eq!(soil.gaps(), &[Range::new(15, 35)]);

    // lower bound of a source maps through it
    assert_eq!(soil.get_map_for(50).offset(), 2);
    assert_eq!(soil.get_map_for(99).offset(), -48);
    assert_eq!(soil.get_map_for(20), RangeMap::identity(Range::new(15, 35)));

    let below = soil.get_map_for(9);
    assert_eq!(below.offset(), 0);
    assert_eq!(below.source().first(), DOMAIN_MIN);
    assert_eq!(below.source().last(), 9);

    let above = soil.get_map_for(100);
    assert_eq!(above.offset(), 0);
    assert_eq!(above.source().first(), 100);
    assert_eq!(above.source().last(), DOMAIN_MAX);
}

#[test]
fn test_empty_stage_is_identity() {
    let empty = MultiRangeMap::new("empty", vec![]);
    let map = empty.get_map_for(123);
    assert_eq!(map.offset(), 0);
    assert_eq!(map.source().first(), DOMAIN_MIN);
    assert_eq!(map.source().last(), DOMAIN_MAX);
    assert_eq!(empty.full_range(), None);
    assert!(empty.gaps().is_empty());
}

#[test]
fn test_apply_splits_across_maps_and_gaps() {
    let stage = stage(&["100 10 5", "200 20 5"]);
    let input: MultiRange = [Range::new(8, 20)].into_iter().collect();

    let output = stage.apply(&input);
    assert_eq!(
        output.ranges(),
        &[
            Range::new(8, 2),    // below the span, identity
            Range::new(15, 5),   // gap, identity
            Range::new(25, 3),   // above the span, identity
            Range::new(100, 5),  // 10..=14
            Range::new(200, 5),  // 20..=24
        ]
    );
    assert_eq!(output.len(), input.len());
}

#[test]
fn test_display() {
    let stage = stage(&["50 98 2"]);
    assert_eq!(
        stage.to_string(),
        "test map:\n  RangeMap[s:Range[first:98, last:99, len:2] --> o:-48]"
    );
    let multi: MultiRange = [Range::new(1, 2)].into_iter().collect();
    assert_eq!(multi.to_string(), "MultiRange[Range[first:1, last:2, len:2]]");
}

/// Disjoint ranges built from (gap before, length) pairs
fn disjoint_ranges(start: i64, parts: &[(i64, i64)]) -> Vec<Range> {
    let mut next = start;
    parts
        .iter()
        .map(|&(gap, len)| {
            let range = Range::new(next + gap, len);
            next = range.last() + 1;
            range
        })
        .collect()
}

fn arb_disjoint(max_parts: usize) -> impl Strategy<Value = Vec<Range>> {
    (
        -1000i64..1000,
        prop::collection::vec((0i64..50, 1i64..40), 0..max_parts),
    )
        .prop_map(|(start, parts)| disjoint_ranges(start, &parts))
}

fn arb_stage() -> impl Strategy<Value = MultiRangeMap> {
    (arb_disjoint(6), prop::collection::vec(-500i64..500, 6)).prop_map(|(sources, offsets)| {
        let maps = sources
            .into_iter()
            .zip(offsets)
            .map(|(source, offset)| RangeMap::new(source, offset))
            .collect();
        MultiRangeMap::new("arb", maps)
    })
}

/// Pointwise reference: push each value through `get_map_for`
fn map_pointwise(stage: &MultiRangeMap, input: &MultiRange) -> Vec<i64> {
    let mut values: Vec<i64> = input
        .iter()
        .map(|v| v + stage.get_map_for(v).offset())
        .collect();
    values.sort_unstable();
    values
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_apply_preserves_length(stage in arb_stage(), input in arb_disjoint(5)) {
        let input: MultiRange = input.into_iter().collect();
        prop_assert_eq!(stage.apply(&input).len(), input.len());
    }

    #[test]
    fn prop_apply_matches_pointwise_mapping(stage in arb_stage(), input in arb_disjoint(4)) {
        let input: MultiRange = input.into_iter().collect();
        let mut applied: Vec<i64> = stage.apply(&input).iter().collect();
        applied.sort_unstable();
        prop_assert_eq!(applied, map_pointwise(&stage, &input));
    }

    #[test]
    fn prop_values_outside_sources_are_fixed(stage in arb_stage(), value in -2000i64..2000) {
        prop_assume!(stage.range_maps().iter().all(|m| !m.source().contains(value)));
        let output = stage.apply(&[Range::point(value)].into_iter().collect());
        prop_assert_eq!(output.ranges(), &[Range::point(value)]);
    }

    #[test]
    fn prop_identity_stage_keeps_membership(input in arb_disjoint(6)) {
        let identity = MultiRangeMap::new("identity", vec![]);
        let input: MultiRange = input.into_iter().collect();
        let output = identity.apply(&input);
        prop_assert_eq!(output.len(), input.len());
        prop_assert_eq!(output.iter().collect::<Vec<_>>(), input.iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_zero_offset_maps_keep_membership(input in arb_disjoint(6), pad in 0i64..20) {
        let input: MultiRange = input.into_iter().collect();
        let mut sorted_input: Vec<i64> = input.iter().collect();
        sorted_input.sort_unstable();

        // one zero-offset map per input range, then a single map spanning all of them
        let per_range: Vec<RangeMap> =
            input.ranges().iter().map(|&r| RangeMap::new(r, 0)).collect();
        let spanning: Vec<RangeMap> = input
            .full_range()
            .map(|full| RangeMap::new(Range::new(full.first() - pad, full.length() + 2 * pad), 0))
            .into_iter()
            .collect();

        for maps in [per_range, spanning] {
            let identity = MultiRangeMap::new("identity", maps);
            let mut output: Vec<i64> = identity.apply(&input).iter().collect();
            output.sort_unstable();
            prop_assert_eq!(&output, &sorted_input);
        }
    }

    #[test]
    fn prop_split_preserves_coverage(first in -100i64..100, length in 1i64..50, at in -150i64..150) {
        let range = Range::new(first, length);
        match range.split_at(at) {
            (whole, None) => prop_assert_eq!(whole, range),
            (head, Some(tail)) => {
                prop_assert_eq!(head.first(), range.first());
                prop_assert_eq!(tail.first(), at);
                prop_assert_eq!(head.last() + 1, tail.first());
                prop_assert_eq!(head.length() + tail.length(), range.length());
            }
        }
    }
}
