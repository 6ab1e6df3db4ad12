use std::sync::LazyLock;

use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use tracing::debug;

use crate::utils::lines::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["grid"])]
pub struct Solver;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<number>\d+)|(?P<symbol>[^0-9.])").expect("token pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Number {
    value: u32,
    line: usize,
    col_first: usize,
    col_last: usize,
}

impl Number {
    pub fn is_adjacent_to(&self, symbol: &Symbol) -> bool {
        self.line.abs_diff(symbol.line) <= 1
            && self.col_first.saturating_sub(1) <= symbol.col
            && symbol.col <= self.col_last + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    value: char,
    line: usize,
    col: usize,
}

impl Symbol {
    /// Product of the two adjacent numbers when this is a gear
    pub fn gear_ratio(&self, numbers: &[Number]) -> Option<u64> {
        if self.value != '*' {
            return None;
        }
        let mut adjacent = numbers.iter().filter(|n| n.is_adjacent_to(self));
        let (first, second) = (adjacent.next()?, adjacent.next()?);
        if adjacent.next().is_some() {
            return None;
        }
        Some(u64::from(first.value) * u64::from(second.value))
    }
}

#[derive(Debug, Default)]
pub struct Schematic {
    numbers: Vec<Number>,
    symbols: Vec<Symbol>,
}

impl AocParser for Solver {
    type SharedData<'a> = Schematic;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut schematic = Schematic::default();
        let mut line_no = 0;
        parse_lines(input, |line| {
            for token in TOKEN.captures_iter(line) {
                if let Some(m) = token.name("number") {
                    let value = m
                        .as_str()
                        .parse()
                        .with_context(|| format!("number '{}' too large", m.as_str()))?;
                    schematic.numbers.push(Number {
                        value,
                        line: line_no,
                        col_first: m.start(),
                        col_last: m.end() - 1,
                    });
                } else if let Some(m) = token.name("symbol") {
                    let value = m.as_str().chars().next().unwrap_or_default();
                    if !value.is_ascii() {
                        bail!("invalid symbol '{}' at column {}", value, m.start() + 1);
                    }
                    schematic.symbols.push(Symbol {
                        value,
                        line: line_no,
                        col: m.start(),
                    });
                }
            }
            line_no += 1;
            Ok(())
        })?;
        debug!(
            numbers = schematic.numbers.len(),
            symbols = schematic.symbols.len(),
            "parsed schematic"
        );
        Ok(schematic)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .numbers
            .iter()
            .filter(|n| shared.symbols.iter().any(|s| n.is_adjacent_to(s)))
            .map(|n| u64::from(n.value))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .symbols
            .iter()
            .filter_map(|s| s.gear_ratio(&shared.numbers))
            .sum();
        Ok(total.to_string())
    }
}
