//! 2020 day 6: Custom Customs

use aoc_solutions::my_solutions::year_2020::day_06;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_06::Solver>(2020, 6)
}
