//! 2020 day 14: Docking Data

use aoc_solutions::my_solutions::year_2020::day_14;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_14::Solver>(2020, 14)
}
