//! 2020 day 17: Conway Cubes

use aoc_solutions::my_solutions::year_2020::day_17;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_17::Solver>(2020, 17)
}
