//! Solution harness: runs registered days and compares with recorded answers

use crate::cache::InputCache;
use crate::error::CliError;
use aoc_solver::{SolverError, SolverRegistry};
use chrono::TimeDelta;
use rayon::prelude::*;
use tracing::{debug, info};

/// Outcome of one part against its recorded answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail { expected: String, actual: String },
    /// Solved, but there is nothing to compare with
    Unrecorded { actual: String },
    /// The part has no solution yet
    NoSolution { recorded: bool },
    Error(String),
}

impl Verdict {
    pub fn is_failure(&self) -> bool {
        match self {
            Verdict::Pass | Verdict::Unrecorded { .. } => false,
            Verdict::NoSolution { recorded } => *recorded,
            Verdict::Fail { .. } | Verdict::Error(_) => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PartReport {
    pub part: u8,
    pub verdict: Verdict,
    pub duration: Option<TimeDelta>,
}

#[derive(Debug, Clone)]
pub struct DayReport {
    pub day: u8,
    /// Per-part verdicts, or why the day could not run at all
    pub outcome: Result<Vec<PartReport>, String>,
}

impl DayReport {
    pub fn failures(&self) -> usize {
        match &self.outcome {
            Ok(parts) => parts.iter().filter(|p| p.verdict.is_failure()).count(),
            Err(_) => 1,
        }
    }
}

/// Check every listed day on a dedicated pool; reports come back in `days` order
pub fn check_days(
    registry: &SolverRegistry,
    cache: &InputCache,
    year: u16,
    days: &[u8],
    threads: usize,
) -> Result<Vec<DayReport>, CliError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;
    info!(days = days.len(), threads, "checking recorded solutions");

    Ok(pool.install(|| {
        days.par_iter()
            .map(|&day| check_day(registry, cache, year, day))
            .collect()
    }))
}

pub fn check_day(registry: &SolverRegistry, cache: &InputCache, year: u16, day: u8) -> DayReport {
    DayReport {
        day,
        outcome: run_day(registry, cache, year, day),
    }
}

fn run_day(
    registry: &SolverRegistry,
    cache: &InputCache,
    year: u16,
    day: u8,
) -> Result<Vec<PartReport>, String> {
    let input = InputCache::read_input(&cache.input_path(day)).map_err(|e| e.to_string())?;
    let mut solver = registry
        .create_solver(year, day, &input)
        .map_err(|e| e.to_string())?;
    debug!(day, parse = %solver.parse_duration(), "parsed");

    let mut reports = Vec::with_capacity(solver.parts() as usize);
    for part in 1..=solver.parts() {
        let expected = cache.expected_answer(day, part).map_err(|e| e.to_string())?;
        let result = solver.solve(part).map_err(SolverError::from);
        let (verdict, duration) = match result {
            Ok(solved) => {
                let duration = Some(solved.duration());
                let verdict = match expected {
                    Some(expected) if expected == solved.answer => Verdict::Pass,
                    Some(expected) => Verdict::Fail {
                        expected,
                        actual: solved.answer,
                    },
                    None => Verdict::Unrecorded {
                        actual: solved.answer,
                    },
                };
                (verdict, duration)
            }
            Err(e) if e.is_not_implemented() => (
                Verdict::NoSolution {
                    recorded: expected.is_some(),
                },
                None,
            ),
            Err(e) => (Verdict::Error(e.to_string()), None),
        };
        debug!(day, part, ?verdict, "checked");
        reports.push(PartReport {
            part,
            verdict,
            duration,
        });
    }
    Ok(reports)
}
