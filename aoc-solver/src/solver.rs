//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses a day's raw input into the data every part works on.
///
/// `SharedData` is a GAT so a day can keep borrowing from the input
/// (`Vec<&'a str>` of lines, for instance) instead of copying it.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Calories;
///
/// impl AocParser for Calories {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         if input.trim().is_empty() {
///             return Err(ParseError::MissingData("empty input".into()));
///         }
///         Ok(input.lines().collect())
///     }
/// }
///
/// assert_eq!(Calories::parse("a\nb").unwrap(), vec!["a", "b"]);
/// ```
pub trait AocParser {
    /// Parsed input plus anything the parts want to cache between each other
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implement one of these per part and let `#[derive(AocSolver)]` write the
/// [`Solver`] dispatch.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Sum;
///
/// impl AocParser for Sum {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Sum {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i64>().to_string())
///     }
/// }
///
/// let mut shared = Sum::parse("1\n2\n3").unwrap();
/// assert_eq!(<Sum as PartSolver<1>>::solve(&mut shared).unwrap(), "6");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - No solution written yet
    /// * `Err(SolveError::SolveFailed)` - The input cannot yield an answer
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A full day: parsing plus a fixed number of parts.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Halfway;
///
/// impl AocParser for Halfway {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Halfway {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.len().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Halfway::parse(" abc ").unwrap();
/// assert_eq!(Halfway::solve_part(&mut shared, 1).unwrap(), "3");
/// assert!(Halfway::solve_part(&mut shared, 2).unwrap_err().is_not_implemented());
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Arguments
    /// * `shared` - Parsed input and intermediate results
    /// * `part` - The part number (1, 2, etc.)
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Bounds-checked entry point used by the type-erased instances
pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
