//! Error types for the CLI

use aoc_solver::{LoadError, SolveError, SolverError};
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Load, parse or solve failure
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// Writing answers to stdout failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Short kind name printed in front of the message
    pub fn category(&self) -> &'static str {
        match self {
            CliError::Solver(SolverError::Load(LoadError::NotFound { .. })) => "not-found",
            CliError::Solver(SolverError::Load(LoadError::Decode { .. })) => "decode",
            CliError::Solver(SolverError::Load(LoadError::Io { .. })) => "io",
            CliError::Solver(SolverError::Parse(_)) => "parse",
            CliError::Solver(SolverError::Solve(SolveError::Computation(_))) => "computation",
            CliError::Solver(SolverError::Solve(
                SolveError::PartNotImplemented(_) | SolveError::PartOutOfRange(_),
            )) => "usage",
            CliError::Io(_) => "io",
        }
    }

    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            "not-found" => 2,
            "decode" => 3,
            "parse" => 4,
            "computation" => 5,
            _ => 1,
        }
    }
}

impl From<LoadError> for CliError {
    fn from(e: LoadError) -> Self {
        CliError::Solver(e.into())
    }
}

impl From<aoc_solver::ParseError> for CliError {
    fn from(e: aoc_solver::ParseError) -> Self {
        CliError::Solver(e.into())
    }
}

impl From<SolveError> for CliError {
    fn from(e: SolveError) -> Self {
        CliError::Solver(e.into())
    }
}
