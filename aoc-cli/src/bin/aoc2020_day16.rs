//! 2020 day 16: Ticket Translation

use aoc_solutions::my_solutions::year_2020::day_16;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_cli::run_main::<day_16::Solver>(2020, 16)
}
