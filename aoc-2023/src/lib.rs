//! Advent of Code 2023 puzzle solutions with automatic registration
//!
//! Each day lives in [`my_solutions`] and registers itself through
//! `#[derive(AutoRegisterSolver)]`; build a registry with
//! `RegistryBuilder::new().register_all_plugins()` to reach them.
//! The day 5 interval engine is in [`utils::range_map`].

pub mod my_solutions;
pub mod utils;

/// The event year every solver in this crate registers under
pub const YEAR: u16 = 2023;
