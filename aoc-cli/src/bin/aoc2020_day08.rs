//! 2020 day 8: Handheld Halting

use aoc_solutions::my_solutions::year_2020::day_08;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_08::Solver>(2020, 8)
}
