//! 2020 day 2: Password Philosophy

use aoc_solutions::my_solutions::year_2020::day_02;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_02::Solver>(2020, 2)
}
