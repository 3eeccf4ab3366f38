//! Helpers shared by the puzzle parsers and solvers

pub mod dp_cache;
pub mod grid;
pub mod parsing;
