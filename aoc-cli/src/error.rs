//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Bad invocation; reported with the usage text and exit status 2
    #[error("{0}")]
    Usage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Some answers differ from the recorded solutions
    #[error("{failed} check(s) failed")]
    CheckFailed { failed: usize },
}

impl CliError {
    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::Usage(_))
    }
}

/// Cache-specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// Reading or writing a file failed
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cache directory creation failed
    #[error("Cache directory creation failed: {0}")]
    DirCreation(String),
}
