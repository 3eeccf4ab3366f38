//! 2020 day 3: Toboggan Trajectory

use aoc_solutions::my_solutions::year_2020::day_03;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_03::Solver>(2020, 3)
}
