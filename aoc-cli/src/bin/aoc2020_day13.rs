//! 2020 day 13: Shuttle Search

use aoc_solutions::my_solutions::year_2020::day_13;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_13::Solver>(2020, 13)
}
