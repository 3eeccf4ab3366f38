//! Puzzle solutions, one module per year

pub mod year_2020;
