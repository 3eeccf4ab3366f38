//! Error types for the solver library

use std::path::PathBuf;
use thiserror::Error;

/// Error type for loading a compressed puzzle input from disk
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file does not exist
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },
    /// The file exists but is not valid gzip, or does not decode to UTF-8 text
    #[error("could not decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Any other I/O failure while reading the file
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for parsing input data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line does not match the expected grammar
    #[error("line {line}: {reason} (got `{token}`)")]
    InvalidLine {
        /// 1-based line number
        line: usize,
        /// The offending token or line
        token: String,
        reason: String,
    },
    /// Input is empty or contains only whitespace
    #[error("input is empty")]
    EmptyInput,
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

impl ParseError {
    /// Build an [`ParseError::InvalidLine`] for the 1-based `line`
    pub fn at_line(line: usize, token: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidLine {
            line,
            token: token.into(),
            reason: reason.to_string(),
        }
    }

    /// Line number carried by the error, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An invariant the algorithm relies on does not hold for this input
    #[error("computation failed: {0}")]
    Computation(String),
}

impl SolveError {
    pub fn computation(message: impl Into<String>) -> Self {
        Self::Computation(message.into())
    }
}

/// Error type for a whole load, parse and solve run
#[derive(Debug, Error)]
pub enum SolverError {
    /// Error occurred while loading the input file
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_line_reports_position_and_token() {
        let err = ParseError::at_line(1, "abc", "expected integer");
        assert_eq!(err.line(), Some(1));
        assert_eq!(err.to_string(), "line 1: expected integer (got `abc`)");
    }

    #[test]
    fn test_structural_errors_have_no_line() {
        assert_eq!(ParseError::EmptyInput.line(), None);
        assert_eq!(ParseError::MissingData("ticket".into()).line(), None);
    }

    #[test]
    fn test_solver_error_wraps_sources() {
        let err: SolverError = SolveError::computation("no seat").into();
        assert!(matches!(err, SolverError::Solve(SolveError::Computation(_))));
        assert_eq!(err.to_string(), "Solve error: computation failed: no seat");

        let err: SolverError = LoadError::NotFound {
            path: PathBuf::from("inputs/2020/day01.txt.gz"),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "input file not found: inputs/2020/day01.txt.gz"
        );
    }
}
