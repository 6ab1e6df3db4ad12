use aho_corasick::AhoCorasick;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::lines::solve_failed;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["trebuchet", "strings"])]
pub struct Solver;

// the digit for pattern i is i % 9 + 1
const PATTERNS: [&str; 18] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "one", "two", "three", "four", "five", "six",
    "seven", "eight", "nine",
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input.lines().collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no calibration lines".into()));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_calibrations(shared, |line| {
            line.bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| u32::from(b - b'0'))
                .collect()
        })
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let matcher = AhoCorasick::new(PATTERNS).map_err(|e| solve_failed(e.into()))?;
        sum_calibrations(shared, |line| {
            // overlapping, so "twone" yields 2 then 1
            matcher
                .find_overlapping_iter(line)
                .map(|m| (m.pattern().as_u32() % 9) + 1)
                .collect()
        })
    }
}

fn sum_calibrations<F>(lines: &[&str], digits_of: F) -> Result<String, SolveError>
where
    F: Fn(&str) -> Vec<u32>,
{
    let mut total = 0u64;
    for (idx, line) in lines.iter().enumerate() {
        let digits = digits_of(line);
        let (Some(first), Some(last)) = (digits.first(), digits.last()) else {
            return Err(solve_failed(anyhow!("(line {}) no digit in '{}'", idx + 1, line)));
        };
        let calibration = first * 10 + last;
        debug!(line = idx + 1, ?digits, calibration);
        total += u64::from(calibration);
    }
    Ok(total.to_string())
}
