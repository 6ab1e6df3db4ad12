//! Property tests for the `AocSolver` derive running through the registry

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError, Solver};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct MinMax;

impl AocParser for MinMax {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split(',')
            .map(|t| t.trim().parse().map_err(|_| ParseError::InvalidFormat(t.to_string())))
            .collect()
    }
}

impl PartSolver<1> for MinMax {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .min()
            .map(i64::to_string)
            .ok_or_else(|| SolveError::SolveFailed("empty".into()))
    }
}

impl PartSolver<2> for MinMax {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // sorts in place; part 1 must not depend on order
        shared.sort_unstable();
        Ok(shared.last().copied().unwrap_or_default().to_string())
    }
}

fn csv(values: &[i64]) -> String {
    values.iter().map(i64::to_string).collect::<Vec<_>>().join(",")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_dispatch_matches_direct_call(values in prop::collection::vec(-1000i64..1000, 1..20), part in 1u8..=2) {
        let input = csv(&values);
        let mut via_dispatch = MinMax::parse(&input).unwrap();
        let mut direct = MinMax::parse(&input).unwrap();

        let expected = match part {
            1 => <MinMax as PartSolver<1>>::solve(&mut direct),
            _ => <MinMax as PartSolver<2>>::solve(&mut direct),
        };
        prop_assert_eq!(MinMax::solve_part(&mut via_dispatch, part).unwrap(), expected.unwrap());
    }

    #[test]
    fn prop_parts_past_max_are_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = MinMax::parse("1,2").unwrap();
        match MinMax::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn prop_mutation_is_visible_to_later_parts(values in prop::collection::vec(-50i64..50, 1..10)) {
        let registry = RegistryBuilder::new().register_solver::<MinMax>(2020, 3).unwrap().build();
        let input = csv(&values);
        let mut solver = registry.create_solver(2020, 3, &input).unwrap();

        let max = solver.solve(2).unwrap().answer;
        let min = solver.solve(1).unwrap().answer;
        prop_assert_eq!(max, values.iter().max().unwrap().to_string());
        prop_assert_eq!(min, values.iter().min().unwrap().to_string());
    }
}

#[test]
fn test_parse_error_surfaces_through_registry() {
    let registry = RegistryBuilder::new().register_solver::<MinMax>(2020, 3).unwrap().build();
    let err = registry.create_solver(2020, 3, "1,x").err().unwrap();
    assert_eq!(err.to_string(), "Parse error: Invalid format: x");
}
