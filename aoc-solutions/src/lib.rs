//! Advent of Code puzzle solutions
//!
//! Solutions are organized by year under [`my_solutions`]. Each day is a
//! self-contained module exposing a `Solver` type that derives `AocSolver`;
//! the `aoc-cli` crate builds one binary per day around it.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
