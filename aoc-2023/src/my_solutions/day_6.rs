use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use tracing::debug;

use crate::utils::lines::solve_failed;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["math"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    time: u64,
    distance: u64,
}

impl Race {
    pub fn new(time: u64, distance: u64) -> Self {
        Self { time, distance }
    }

    fn wins(&self, hold: u64) -> bool {
        u128::from(hold) * u128::from(self.time - hold) > u128::from(self.distance)
    }

    /// Number of hold times `h` with `h * (time - h) > distance`
    ///
    /// The winning holds form an interval symmetric around `time / 2`. Its
    /// lower edge comes from the quadratic's smaller root and is then nudged
    /// with exact integer checks, since `f64` loses precision on large races.
    pub fn ways_to_win(&self) -> u64 {
        let middle = self.time / 2;
        if !self.wins(middle) {
            return 0;
        }

        let (t, d) = (self.time as f64, self.distance as f64);
        let root = (t * t - 4.0 * d).max(0.0).sqrt();
        let mut first = (((t - root) / 2.0).floor().max(0.0) as u64).min(middle);
        while first > 0 && self.wins(first - 1) {
            first -= 1;
        }
        while !self.wins(first) {
            first += 1;
        }

        // a zero hold never wins, so first >= 1
        let ways = self.time - 2 * first + 1;
        debug!(race = ?self, first, ways, "ways to win");
        ways
    }
}

/// The two lines of the sheet, kept as digit tokens
#[derive(Debug, Clone)]
pub struct Sheet<'a> {
    times: Vec<&'a str>,
    distances: Vec<&'a str>,
}

impl Sheet<'_> {
    /// One race per column
    pub fn races(&self) -> anyhow::Result<Vec<Race>> {
        self.times
            .iter()
            .zip(&self.distances)
            .map(|(time, distance)| Ok(Race::new(parse_number(time)?, parse_number(distance)?)))
            .collect()
    }

    /// Each line's digits joined into one number
    pub fn single_race(&self) -> anyhow::Result<Race> {
        Ok(Race::new(
            parse_number(&self.times.concat())?,
            parse_number(&self.distances.concat())?,
        ))
    }
}

fn parse_number(digits: &str) -> anyhow::Result<u64> {
    digits
        .parse()
        .with_context(|| format!("'{}' does not fit in 64 bits", digits))
}

fn parse_line<'a>(line: &'a str, label: &str) -> anyhow::Result<Vec<&'a str>> {
    let values = line
        .strip_prefix(label)
        .ok_or_else(|| anyhow!("expected line starting with '{}'", label))?;
    let tokens: Vec<&str> = values.split_whitespace().collect();
    if let Some(bad) = tokens.iter().find(|t| !t.bytes().all(|b| b.is_ascii_digit())) {
        bail!("'{}' is not a number", bad);
    }
    Ok(tokens)
}

impl AocParser for Solver {
    type SharedData<'a> = Sheet<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (time_line, distance_line) = input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .collect_tuple()
            .ok_or_else(|| {
                ParseError::MissingData("expected a Time line and a Distance line".into())
            })?;

        let times = parse_line(time_line, "Time:")
            .map_err(|e| ParseError::InvalidFormat(format!("(line 1) {:#}", e)))?;
        let distances = parse_line(distance_line, "Distance:")
            .map_err(|e| ParseError::InvalidFormat(format!("(line 2) {:#}", e)))?;
        if times.len() != distances.len() {
            return Err(ParseError::InvalidFormat(format!(
                "{} times but {} distances",
                times.len(),
                distances.len()
            )));
        }
        Ok(Sheet { times, distances })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let races = shared.races().map_err(solve_failed)?;
        races
            .iter()
            .try_fold(1u64, |product, race| product.checked_mul(race.ways_to_win()))
            .map(|product| product.to_string())
            .ok_or_else(|| solve_failed(anyhow!("product of ways does not fit in 64 bits")))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let race = shared.single_race().map_err(solve_failed)?;
        Ok(race.ways_to_win().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use indoc::indoc;
    use proptest::prelude::*;

    const EXAMPLE: &str = indoc! {"
        Time:      7  15   30
        Distance:  9  40  200
    "};

    #[test]
    fn test_first_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "288");
    }

    #[test]
    fn test_second_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "71503");
    }

    #[test]
    fn test_exact_boundaries() {
        assert_eq!(Race::new(7, 9).ways_to_win(), 4);
        // 10 * 20 ties the record and does not count
        assert_eq!(Race::new(30, 200).ways_to_win(), 9);
        assert_eq!(Race::new(4, 4).ways_to_win(), 0);
        assert_eq!(Race::new(0, 0).ways_to_win(), 0);
        assert_eq!(Race::new(5, 0).ways_to_win(), 4);
    }

    #[test]
    fn test_large_race_is_exact() {
        let time = 2_000_000_000u64;
        let record = (time / 2) * (time / 2) - 1;
        assert_eq!(Race::new(time, record).ways_to_win(), 1);
    }

    #[test]
    fn test_longest_race() {
        assert_eq!(Race::new(u64::MAX, 0).ways_to_win(), u64::MAX - 1);
        assert_eq!(Race::new(u64::MAX - 1, 0).ways_to_win(), u64::MAX - 2);
    }

    #[test]
    fn test_product_overflow_fails() {
        let mut shared = Solver::parse(indoc! {"
            Time:      4294967296 4294967296 4294967296
            Distance:  0 0 0
        "})
        .unwrap();
        let err = Solver::solve_part(&mut shared, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Solve failed: product of ways does not fit in 64 bits"
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Solver::parse("Time: 1 2"), Err(ParseError::MissingData(_))));
        assert!(matches!(
            Solver::parse("Time: 1 2\nDistance: 3"),
            Err(ParseError::InvalidFormat(_))
        ));
        let err = Solver::parse("Time: 1 x\nDistance: 3 4").unwrap_err();
        assert_eq!(err.to_string(), "Invalid format: (line 1) 'x' is not a number");
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force(time in 0u64..300, distance in 0u64..25_000) {
            let race = Race::new(time, distance);
            let brute = (0..=time).filter(|&h| h * (time - h) > distance).count() as u64;
            prop_assert_eq!(race.ways_to_win(), brute);
        }
    }
}
