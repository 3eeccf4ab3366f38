//! 2020 day 9: Encoding Error

use aoc_solutions::my_solutions::year_2020::day_09;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_09::Solver>(2020, 9)
}
