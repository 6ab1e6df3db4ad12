//! Solver registry: maps puzzle ids to factories that parse input into solvers

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::fmt;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// A single puzzle: one day of one event year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    pub year: u16,
    pub day: u8,
}

impl PuzzleId {
    pub fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }

    /// Flat storage slot, or None when year/day is outside the supported window
    #[inline]
    fn index(self) -> Option<usize> {
        if self.year < BASE_YEAR || self.year >= BASE_YEAR + MAX_YEARS as u16 {
            return None;
        }
        if self.day == 0 || self.day > DAYS_PER_YEAR as u8 {
            return None;
        }
        let y = (self.year - BASE_YEAR) as usize;
        let d = (self.day - 1) as usize;
        Some(y * DAYS_PER_YEAR + d)
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        Self {
            year: BASE_YEAR + (index / DAYS_PER_YEAR) as u16,
            day: (index % DAYS_PER_YEAR) as u8 + 1,
        }
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.year, self.day)
    }
}

// ============================================================================
// Factory Types
// ============================================================================

/// Thread-safe factory: parses an input and returns a ready-to-solve instance
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub puzzle: PuzzleId,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Fluent builder for an immutable [`SolverRegistry`]
///
/// Registration rejects duplicates and out-of-window puzzles.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register_solver::<Echo>(2023, 1)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2023, 1, "hello").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a raw factory with an explicit part count
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = PuzzleId::new(year, day)
            .index()
            .ok_or(RegistrationError::InvalidPuzzle(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register a [`Solver`] type for a year and day
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(year, day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            let solver: Box<dyn DynSolver + '_> = Box::new(instance);
            Ok(solver)
        })
    }

    /// Register every plugin submitted through `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register only the plugins accepted by `filter`
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2023)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table from puzzle to solver factory
pub struct SolverRegistry {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistry {
    fn entry(&self, puzzle: PuzzleId) -> Option<&SolverFactoryEntry> {
        puzzle.index().and_then(|i| self.entries.get(i)?.as_ref())
    }

    /// Parse `input` with the solver registered for year/day
    ///
    /// # Returns
    /// * `Err(SolverError::InvalidPuzzle)` - year/day outside the supported window
    /// * `Err(SolverError::NotFound)` - nothing registered there
    /// * `Err(SolverError::ParseError)` - the day rejected the input
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let puzzle = PuzzleId::new(year, day);
        if puzzle.index().is_none() {
            return Err(SolverError::InvalidPuzzle(year, day));
        }
        let entry = self
            .entry(puzzle)
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Check if a solver exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entry(PuzzleId::new(year, day)).is_some()
    }

    /// Get metadata for a specific solver
    pub fn info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        let puzzle = PuzzleId::new(year, day);
        self.entry(puzzle).map(|e| FactoryInfo {
            puzzle,
            parts: e.parts,
        })
    }

    /// Iterate over metadata for all registered solvers, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| FactoryInfo {
                puzzle: PuzzleId::from_index(i),
                parts: e.parts,
            })
        })
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Object-safe registration hook so differently typed solvers can share a plugin table
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Number of parts the solver implements
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin record submitted by `#[derive(AutoRegisterSolver)]`
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels used for filtering
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Register a solver type on a builder variable, panicking on conflicts
///
/// ```
/// use aoc_solver::{AocParser, register_solver, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct Nothing;
///
/// impl AocParser for Nothing {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Nothing {
///     const PARTS: u8 = 2;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// let mut builder = RegistryBuilder::new();
/// register_solver!(builder, Nothing, 2023, 9);
/// let registry = builder.build();
/// assert!(registry.contains(2023, 9));
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder
            .register_solver::<$solver>($year, $day)
            .expect("Failed to register solver");
    };
}
