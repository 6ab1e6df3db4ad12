//! Advent of Code Solver Library
//!
//! A small framework for puzzle solvers: each day parses its input once and
//! answers a fixed number of parts against the parsed data.
//!
//! # Overview
//!
//! - [`AocParser`] turns the raw input into `SharedData`, which may borrow from it
//! - [`PartSolver<N>`] answers part `N`; `#[derive(AocSolver)]` writes the
//!   [`Solver`] dispatch from the implemented parts
//! - [`SolverInstance`] times parsing and solving; [`DynSolver`] erases its type
//! - [`SolverRegistry`] maps `(year, day)` to factories, filled by hand through
//!   [`RegistryBuilder`] or from plugins submitted by `#[derive(AutoRegisterSolver)]`
//!
//! A part that has no solution yet returns [`SolveError::PartNotImplemented`];
//! callers treat it as "no answer" rather than as a failure.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
//!
//! struct Depths;
//!
//! impl AocParser for Depths {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Depths {
//!     const PARTS: u8 = 2;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.windows(2).filter(|w| w[1] > w[0]).count().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Depths>(2021, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2021, 1, "1\n3\n2\n5").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "2");
//! assert!(solver.solve(2).unwrap_err().is_not_implemented());
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, PuzzleId, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin,
    SolverRegistry, BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
