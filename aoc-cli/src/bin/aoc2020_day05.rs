//! 2020 day 5: Binary Boarding

use aoc_solutions::my_solutions::year_2020::day_05;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_05::Solver>(2020, 5)
}
