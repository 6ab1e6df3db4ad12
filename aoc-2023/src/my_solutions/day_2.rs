use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::lines::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["cubes"])]
pub struct Solver;

/// Cubes in the bag for part 1
pub const CUBE_LIMITS: CubeSet = CubeSet {
    red: 12,
    green: 13,
    blue: 14,
};

/// One handful of cubes; never all zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeSet {
    red: u32,
    green: u32,
    blue: u32,
}

impl CubeSet {
    pub fn new(red: u32, green: u32, blue: u32) -> anyhow::Result<Self> {
        if (red, green, blue) == (0, 0, 0) {
            bail!("zero set not valid");
        }
        Ok(Self { red, green, blue })
    }

    pub fn possible_with(&self, available: &CubeSet) -> bool {
        self.red <= available.red && self.green <= available.green && self.blue <= available.blue
    }
}

impl FromStr for CubeSet {
    type Err = anyhow::Error;

    /// `3 blue, 4 red`; absent colours count as zero
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mut red, mut green, mut blue) = (None, None, None);
        for cubes in s.split(',') {
            let (count, colour) = cubes
                .trim()
                .split_once(' ')
                .ok_or_else(|| anyhow!("expected '<count> <colour>', found '{}'", cubes.trim()))?;
            let count: u32 = count
                .parse()
                .with_context(|| format!("bad cube count '{}'", count))?;
            let slot = match colour {
                "red" => &mut red,
                "green" => &mut green,
                "blue" => &mut blue,
                other => bail!("unknown colour '{}'", other),
            };
            if slot.replace(count).is_some() {
                bail!("colour '{}' given twice in '{}'", colour, s.trim());
            }
        }
        let set = CubeSet::new(red.unwrap_or(0), green.unwrap_or(0), blue.unwrap_or(0))?;
        debug!(play = s.trim(), ?set, "extracted");
        Ok(set)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: u32,
    plays: Vec<CubeSet>,
}

impl Game {
    pub fn possible_with(&self, available: &CubeSet) -> bool {
        self.plays.iter().all(|play| play.possible_with(available))
    }

    /// Product of the per-colour maxima
    pub fn power(&self) -> u64 {
        let (red, green, blue) = self.plays.iter().fold((0, 0, 0), |(r, g, b), play| {
            (r.max(play.red), g.max(play.green), b.max(play.blue))
        });
        u64::from(red) * u64::from(green) * u64::from(blue)
    }
}

impl FromStr for Game {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (header, plays) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("unexpected line format: {}", line))?;
        let id = header
            .strip_prefix("Game ")
            .ok_or_else(|| anyhow!("unexpected line format: {}", line))?
            .trim()
            .parse()
            .with_context(|| format!("bad game id in '{}'", header))?;
        let plays = plays.split(';').map(str::parse).collect::<anyhow::Result<_>>()?;
        Ok(Game { id, plays })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, str::parse)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .filter(|game| game.possible_with(&CUBE_LIMITS))
            .map(|game| game.id)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(Game::power).sum::<u64>().to_string())
    }
}
