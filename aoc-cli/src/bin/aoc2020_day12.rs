//! 2020 day 12: Rain Risk

use aoc_solutions::my_solutions::year_2020::day_12;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_12::Solver>(2020, 12)
}
