//! 2020 day 15: Rambunctious Recitation

use aoc_solutions::my_solutions::year_2020::day_15;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_15::Solver>(2020, 15)
}
