use std::collections::HashMap;

use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use tracing::debug;

use crate::utils::lines::solve_failed;
use crate::utils::range_map::{DOMAIN_MAX, DOMAIN_MIN, MultiRange, MultiRangeMap, Range, RangeMap};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["ranges"])]
pub struct Solver;

/// Stages in the order seeds pass through them
pub const MAP_ORDER: [&str; 7] = [
    "seed-to-soil",
    "soil-to-fertilizer",
    "fertilizer-to-water",
    "water-to-light",
    "light-to-temperature",
    "temperature-to-humidity",
    "humidity-to-location",
];

#[derive(Debug, Clone)]
pub struct Almanac {
    seeds: Vec<i64>,
    stages: Vec<MultiRangeMap>,
}

impl Almanac {
    /// Every seed is a single value
    pub fn seed_points(&self) -> MultiRange {
        self.seeds.iter().copied().map(Range::point).collect()
    }

    /// Seeds read as `(first, length)` pairs
    pub fn seed_ranges(&self) -> anyhow::Result<MultiRange> {
        if self.seeds.len() % 2 != 0 {
            bail!("seed ranges need an even number of values, found {}", self.seeds.len());
        }
        self.seeds
            .iter()
            .tuples()
            .map(|(&first, &length)| -> anyhow::Result<Range> {
                let range = Range::try_new(first, length).ok_or_else(|| {
                    anyhow!("seed range starting at {} has length {}", first, length)
                })?;
                if range.last() > DOMAIN_MAX {
                    bail!("{} reaches past {}", range, DOMAIN_MAX);
                }
                Ok(range)
            })
            .collect()
    }

    /// Push `seeds` through every stage and take the smallest location
    pub fn lowest_location(&self, seeds: &MultiRange) -> Option<i64> {
        debug!(count = seeds.len(), "seeds: {}", seeds);
        debug!("seed gaps: {:?}", seeds.gaps());
        let locations = self.stages.iter().fold(seeds.clone(), |ranges, stage| {
            debug!(full_range = ?stage.full_range(), gaps = ?stage.gaps(), "{}", stage);
            stage.apply(&ranges)
        });
        let lowest = locations.min();
        debug!(?lowest, "min location");
        lowest
    }
}

fn parse_seeds(values: &str) -> anyhow::Result<Vec<i64>> {
    values
        .split_whitespace()
        .map(|v| -> anyhow::Result<i64> {
            let seed: i64 = v.parse().with_context(|| format!("'{}' is not a seed", v))?;
            if !(DOMAIN_MIN..=DOMAIN_MAX).contains(&seed) {
                bail!("seed {} is outside [{}, {}]", seed, DOMAIN_MIN, DOMAIN_MAX);
            }
            Ok(seed)
        })
        .collect()
}

fn parse_almanac(input: &str) -> Result<Almanac, ParseError> {
    let mut seeds = None;
    let mut maps: HashMap<&str, Vec<RangeMap>> = HashMap::new();
    let mut current: Option<&str> = None;

    for (idx, line) in input.lines().enumerate() {
        let invalid =
            |e: anyhow::Error| ParseError::InvalidFormat(format!("(line {}) {:#}", idx + 1, e));

        if let Some(values) = line.strip_prefix("seeds:") {
            if seeds.is_some() {
                return Err(invalid(anyhow!("seeds given twice")));
            }
            seeds = Some(parse_seeds(values).map_err(invalid)?);
        } else if let Some(name) = line.strip_suffix(" map:") {
            let name = name.trim();
            if maps.insert(name, Vec::new()).is_some() {
                return Err(invalid(anyhow!("map '{}' given twice", name)));
            }
            current = Some(name);
        } else if line.trim().is_empty() {
            if let Some(name) = current.take() {
                debug!(stage = name, maps = maps.get(name).map_or(0, Vec::len), "map finished");
            }
        } else {
            let name = current.ok_or_else(|| invalid(anyhow!("bad line '{}'", line)))?;
            let map = RangeMap::from_line(line).map_err(invalid)?;
            maps.entry(name).or_default().push(map);
        }
    }

    let seeds = seeds.ok_or_else(|| ParseError::MissingData("no 'seeds:' line".into()))?;
    let stages = MAP_ORDER
        .iter()
        .map(|&name| {
            maps.remove(name)
                .map(|range_maps| MultiRangeMap::new(name, range_maps))
                .ok_or_else(|| ParseError::MissingData(format!("no '{} map:' section", name)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Almanac { seeds, stages })
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_almanac(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let seeds = shared.seed_points();
        lowest_location(shared, &seeds)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let seeds = shared.seed_ranges().map_err(solve_failed)?;
        lowest_location(shared, &seeds)
    }
}

fn lowest_location(almanac: &Almanac, seeds: &MultiRange) -> Result<String, SolveError> {
    almanac
        .lowest_location(seeds)
        .map(|location| location.to_string())
        .ok_or_else(|| solve_failed(anyhow!("no seeds to plant")))
}
