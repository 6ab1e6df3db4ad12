use std::collections::HashSet;
use std::sync::LazyLock;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use tracing::debug;

use crate::utils::lines::{parse_lines, solve_failed};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["cards"])]
pub struct Solver;

static CARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Card\s+(\d+):(.+)\|(.+)$").expect("card pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: u32,
    matches: usize,
}

impl Card {
    fn from_line(line: &str) -> anyhow::Result<Self> {
        let caps = CARD
            .captures(line)
            .ok_or_else(|| anyhow!("invalid line '{}'", line))?;
        let id: u32 = caps[1].parse().context("bad card id")?;
        let numbers = number_set(&caps[2])?;
        let winning = number_set(&caps[3])?;
        let matches = numbers.intersection(&winning).count();
        debug!(id, matches, "card");
        Ok(Card { id, matches })
    }

    /// `2^(matches - 1)`, or zero without matches; None past 64 bits
    pub fn worth(&self) -> Option<u64> {
        match self.matches {
            0 => Some(0),
            m => 1u64.checked_shl(u32::try_from(m - 1).ok()?),
        }
    }
}

fn number_set(numbers: &str) -> anyhow::Result<HashSet<u32>> {
    numbers
        .split_whitespace()
        .map(|n| n.parse().with_context(|| format!("'{}' is not a number", n)))
        .collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Card>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, Card::from_line)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .try_fold(0u64, |total, card| total.checked_add(card.worth()?))
            .map(|total| total.to_string())
            .ok_or_else(|| solve_failed(anyhow!("points do not fit in 64 bits")))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // copies never run past the end of the table
        let mut instances = vec![1u64; shared.len()];
        for (idx, card) in shared.iter().enumerate() {
            let held = instances[idx];
            let won = (idx + 1)..(idx + 1 + card.matches).min(shared.len());
            for next in won {
                instances[next] = instances[next]
                    .checked_add(held)
                    .ok_or_else(|| solve_failed(anyhow!("card {} copies overflow", next + 1)))?;
            }
        }
        instances
            .iter()
            .try_fold(0u64, |total, &n| total.checked_add(n))
            .map(|total| total.to_string())
            .ok_or_else(|| solve_failed(anyhow!("card count does not fit in 64 bits")))
    }
}
