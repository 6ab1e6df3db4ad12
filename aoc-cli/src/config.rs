//! Configuration resolution from CLI args

use crate::cache::InputCache;
use crate::cli::{Args, Command, PartSelection};
use crate::error::CliError;
use aoc_http_client::AocClient;
use aoc_solver::SolverRegistry;
use chrono::{Datelike, Local, NaiveDate};
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

const LAST_DAY: u8 = 25;

/// What the launcher was asked to do, with every default filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Run {
        day: u8,
        input: PathBuf,
        part: PartSelection,
    },
    Check {
        days: Vec<u8>,
        threads: usize,
    },
    Fetch {
        day: u8,
        force: bool,
    },
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Root of the puzzle data, `~` expanded
    pub data_dir: PathBuf,
    /// Answers only, no timings
    pub quiet: bool,
    pub task: Task,
}

impl Config {
    /// Build config from CLI args against today's local date
    pub fn from_args(args: Args, registry: &SolverRegistry, year: u16) -> Result<Self, CliError> {
        Self::resolve(args, Local::now().date_naive(), registry, year)
    }

    pub fn resolve(
        args: Args,
        today: NaiveDate,
        registry: &SolverRegistry,
        year: u16,
    ) -> Result<Self, CliError> {
        let data_dir = expand_tilde(&args.data_dir);
        let cache = InputCache::new(data_dir.clone());

        let task = match args.command {
            Command::Run { day, input, part } => {
                let day = require_code(day.map_or_else(|| infer_day(today), Ok)?, registry, year)?;
                let input = input.unwrap_or_else(|| cache.input_path(day));
                if !input.is_file() {
                    return Err(CliError::Usage(format!(
                        "Could not find file {}",
                        input.display()
                    )));
                }
                Task::Run { day, input, part }
            }
            Command::Check { day, all, threads } => {
                let days = if all {
                    registry
                        .iter_info()
                        .filter(|info| info.puzzle.year == year)
                        .map(|info| info.puzzle.day)
                        .collect()
                } else {
                    let day = day.map_or_else(|| infer_day(today), Ok)?;
                    vec![require_code(day, registry, year)?]
                };
                Task::Check {
                    days,
                    threads: threads.filter(|&n| n > 0).unwrap_or_else(num_cpus),
                }
            }
            Command::Fetch { day, force } => {
                let day = day.map_or_else(|| infer_day(today), Ok)?;
                if !(1..=LAST_DAY).contains(&day) {
                    return Err(CliError::Usage(format!(
                        "Invalid day {}. Try between 1 and {}.",
                        day, LAST_DAY
                    )));
                }
                Task::Fetch { day, force }
            }
        };

        Ok(Config {
            data_dir,
            quiet: args.quiet,
            task,
        })
    }
}

/// Today's day of month, only meaningful while the event runs
fn infer_day(today: NaiveDate) -> Result<u8, CliError> {
    if today.month() != 12 {
        return Err(CliError::Usage(
            "Not in December, cannot infer day, use --day N".to_string(),
        ));
    }
    Ok(today.day() as u8)
}

fn require_code(day: u8, registry: &SolverRegistry, year: u16) -> Result<u8, CliError> {
    if registry.contains(year, day) {
        Ok(day)
    } else {
        Err(CliError::Usage(format!(
            "Could not find code for that day: {}. Try between 1 and {}.",
            day, LAST_DAY
        )))
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Session from `AOC_SESSION`, or a hidden prompt when unset
pub fn resolve_session() -> Result<Zeroizing<String>, CliError> {
    if let Ok(session) = std::env::var("AOC_SESSION")
        && !session.trim().is_empty()
    {
        return Ok(Zeroizing::new(session));
    }
    let session = Zeroizing::new(
        rpassword::prompt_password("Enter AOC session key: ")
            .map_err(|e| CliError::Config(format!("Failed to read session: {}", e)))?,
    );
    if session.trim().is_empty() {
        return Err(CliError::Config("Session token is required.".to_string()));
    }
    Ok(session)
}

/// Verify the session against the site and return the account's user id
pub fn verify_session(client: &AocClient, session: &str) -> Result<u64, CliError> {
    client
        .verify_session(session)?
        .user_id
        .ok_or_else(|| CliError::Config("Invalid session: could not fetch user ID".to_string()))
}
