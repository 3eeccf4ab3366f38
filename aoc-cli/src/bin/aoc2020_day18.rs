//! 2020 day 18: Operation Order

use aoc_solutions::my_solutions::year_2020::day_18;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_18::Solver>(2020, 18)
}
