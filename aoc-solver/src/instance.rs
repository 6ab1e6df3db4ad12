//! Timed solver instances and the type-erased `DynSolver` interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer for one part together with when it was computed
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// One parsed puzzle input bound to its solver type
///
/// The input is parsed exactly once, in [`SolverInstance::new`]; every part
/// then runs against the same shared data.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and remember how long it took
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }

    /// Borrow the parsed data
    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Type-erased interface over any [`SolverInstance`]
///
/// The registry hands these out so the launcher can run any day without
/// knowing its parsed data type.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn run_both(solver: &mut dyn DynSolver) {
///     for part in 1..=solver.parts() {
///         match solver.solve(part) {
///             Ok(result) => println!("{}: {} ({})", part, result.answer, result.duration()),
///             Err(e) if e.is_not_implemented() => println!("{}: no solution", part),
///             Err(e) => eprintln!("{}: {}", part, e),
///         }
///     }
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Get the year for this solver
    fn year(&self) -> u16;

    /// Get the day for this solver
    fn day(&self) -> u8;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::AocParser;

    struct Words;

    impl AocParser for Words {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("no words".into()));
            }
            Ok(input.split_whitespace().collect())
        }
    }

    impl Solver for Words {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_instance_keeps_metadata_and_borrows_input() {
        let input = String::from("alpha beta gamma");
        let instance = SolverInstance::<Words>::new(2023, 4, &input).unwrap();
        assert_eq!(instance.shared(), &vec!["alpha", "beta", "gamma"]);

        let solver: &dyn DynSolver = &instance;
        assert_eq!(solver.year(), 2023);
        assert_eq!(solver.day(), 4);
        assert_eq!(solver.parts(), 2);
        assert!(solver.parse_duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_solve_reports_answer_and_errors() {
        let mut instance = SolverInstance::<Words>::new(2023, 4, "a b").unwrap();
        let result = instance.solve(1).unwrap();
        assert_eq!(result.answer, "2");
        assert!(result.duration() >= TimeDelta::zero());

        assert!(instance.solve(2).unwrap_err().is_not_implemented());
        assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_parse_failure_is_reported() {
        let result = SolverInstance::<Words>::new(2023, 4, "");
        assert!(matches!(result, Err(ParseError::MissingData(_))));
    }
}
