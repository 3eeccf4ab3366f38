//! 2020 day 7: Handy Haversacks

use aoc_solutions::my_solutions::year_2020::day_07;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_07::Solver>(2020, 7)
}
