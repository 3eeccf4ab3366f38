//! 2020 day 4: Passport Processing

use aoc_solutions::my_solutions::year_2020::day_04;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_04::Solver>(2020, 4)
}
