//! 2020 day 11: Seating System

use aoc_solutions::my_solutions::year_2020::day_11;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_11::Solver>(2020, 11)
}
