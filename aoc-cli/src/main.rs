//! `aoc` - run, check and fetch the Advent of Code 2023 puzzles

mod cache;
mod check;
mod cli;
mod config;
mod error;
mod output;

// Link the day modules so their solver plugins are collected
use aoc_2023 as _;

use aoc_2023::YEAR;
use aoc_http_client::AocClient;
use aoc_solver::{RegistryBuilder, SolverRegistry};
use cache::InputCache;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use cli::{Args, PartSelection};
use config::{Config, Task};
use error::CliError;
use output::OutputFormatter;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info, warn};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_usage() => Args::command()
            .error(ErrorKind::ValueValidation, e.to_string())
            .exit(),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `--debug` wins over `RUST_LOG`; otherwise only warnings are shown
fn init_tracing(debug: bool) {
    let directives = if debug {
        "debug".to_string()
    } else {
        std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).unwrap_or("warn".to_string())
    };
    let env_filter = tracing_subscriber::EnvFilter::builder().parse_lossy(directives);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let registry = build_registry()?;
    let config = Config::from_args(args, &registry, YEAR)?;
    debug!(?config, "resolved configuration");

    let formatter = OutputFormatter::new(config.quiet);
    let cache = InputCache::new(config.data_dir);

    match config.task {
        Task::Run { day, input, part } => run_day(&registry, &formatter, day, &input, part),
        Task::Check { days, threads } => check(&registry, &formatter, &cache, &days, threads),
        Task::Fetch { day, force } => fetch(&cache, day, force),
    }
}

fn build_registry() -> Result<SolverRegistry, CliError> {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == YEAR)?
        .build();
    debug!(solvers = registry.len(), "registry built");
    Ok(registry)
}

fn run_day(
    registry: &SolverRegistry,
    formatter: &OutputFormatter,
    day: u8,
    input_path: &Path,
    part: PartSelection,
) -> Result<(), CliError> {
    let input = InputCache::read_input(input_path)?;
    info!(day, input = %input_path.display(), "running");

    let mut solver = registry.create_solver(YEAR, day, &input)?;
    let mut parse = Some(solver.parse_duration());

    for part in part.parts(solver.parts()) {
        match solver.solve(part) {
            Ok(result) => {
                println!("{}", formatter.solution(day, part, &result.answer));
                if let Some(timing) = formatter.timing(parse.take(), result.duration()) {
                    println!("{}", timing);
                }
            }
            Err(e) if e.is_not_implemented() => println!("{}", formatter.no_solution(day, part)),
            Err(e) => return Err(CliError::Solver(e.into())),
        }
    }
    Ok(())
}

fn check(
    registry: &SolverRegistry,
    formatter: &OutputFormatter,
    cache: &InputCache,
    days: &[u8],
    threads: usize,
) -> Result<(), CliError> {
    let reports = check::check_days(registry, cache, YEAR, days, threads)?;
    for report in &reports {
        for line in formatter.day_report(report) {
            println!("{}", line);
        }
    }
    println!("{}", formatter.check_summary(&reports));

    let failed: usize = reports.iter().map(check::DayReport::failures).sum();
    if failed > 0 {
        return Err(CliError::CheckFailed { failed });
    }
    Ok(())
}

fn fetch(cache: &InputCache, day: u8, force: bool) -> Result<(), CliError> {
    if cache.contains(day) && !force {
        warn!(day, "input already present, use --force to download again");
        println!("{}", cache.input_path(day).display());
        return Ok(());
    }

    let session = config::resolve_session()?;
    let client = AocClient::new()?;
    let user_id = config::verify_session(&client, &session)?;
    info!(user_id, day, "session verified, downloading input");

    let input = client.get_input(YEAR, day, &session)?;
    let path = cache.put(day, &input)?;
    println!("{}", path.display());
    Ok(())
}
