//! 2020 day 1: Report Repair

use aoc_solutions::my_solutions::year_2020::day_01;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_01::Solver>(2020, 1)
}
