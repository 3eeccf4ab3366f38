//! Advent of Code Solver Library
//!
//! The shape every puzzle program shares: a gzip [`load_input`] loader, an
//! [`AocParser`] turning raw text into typed data, and a [`Solver`] computing
//! one answer per part. Puzzles never interoperate, so there is no registry:
//! each program instantiates [`SolverInstance`] with its own solver type.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverInstance};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .enumerate()
//!             .map(|(idx, line)| {
//!                 line.parse()
//!                     .map_err(|e| ParseError::at_line(idx + 1, line, e))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i32>().to_string())
//!     }
//! }
//!
//! let mut solver = SolverInstance::<MyDay1>::new(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//!
//! let err = SolverInstance::<MyDay1>::new(2023, 1, "abc").err().unwrap();
//! assert_eq!(err.line(), Some(1));
//! ```
//!
//! # Part Dependencies
//!
//! Parts share one `SharedData` value. A part that needs another part's
//! result (day 9 of 2020 reuses part 1's invalid number) caches it in the
//! shared data with `Option::get_or_insert_with`, so parts stay callable in
//! any order.

mod error;
mod input;
mod instance;
mod solver;

pub use error::{LoadError, ParseError, SolveError, SolverError};
pub use input::{RawInput, load_input};
pub use instance::{SolveResult, SolverInstance};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export the derive macro
pub use aoc_solver_macros::AocSolver;
