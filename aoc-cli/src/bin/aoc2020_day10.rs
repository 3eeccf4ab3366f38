//! 2020 day 10: Adapter Array

use aoc_solutions::my_solutions::year_2020::day_10;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_10::Solver>(2020, 10)
}
