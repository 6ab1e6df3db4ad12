//! Error types for the solver library

use thiserror::Error;

/// Error raised while turning raw puzzle input into shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// A line or token does not follow the day's grammar
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A section the day needs is absent from the input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error raised while solving a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The part exists for this day but has no solution yet
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is 0 or larger than the solver's part count
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// Parsed data was well formed but could not produce an answer
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Whether this error is the soft "no solution yet" signal rather than a failure
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, SolveError::PartNotImplemented(_))
    }
}

/// Error type for registry lookups and solver execution
#[derive(Debug, Error)]
pub enum SolverError {
    /// Nothing registered for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day outside the range the registry can address
    #[error("Invalid puzzle: year {0} day {1}")]
    InvalidPuzzle(u16, u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

impl SolverError {
    /// Whether this error wraps [`SolveError::PartNotImplemented`]
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, SolverError::SolveError(e) if e.is_not_implemented())
    }
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver already occupies this year-day slot
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day outside the range the registry can address
    #[error("Invalid puzzle: year {0} day {1}")]
    InvalidPuzzle(u16, u8),
}
