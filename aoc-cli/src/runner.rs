//! Load, parse and solve one puzzle

use crate::cli::Args;
use crate::config::Config;
use crate::error::CliError;
use crate::logging;
use crate::output::OutputFormatter;
use aoc_solver::{Solver, SolveResult, SolverInstance, load_input};
use chrono::TimeDelta;
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, info};

/// Answers of one run, ready for printing
#[derive(Debug, Clone)]
pub struct Report {
    pub year: u16,
    pub day: u8,
    pub parse_duration: TimeDelta,
    pub results: Vec<SolveResult>,
}

/// Run the solver `S` for `year`/`day` against the configured input
///
/// Every requested part is solved before anything is returned, so a failing
/// part never leaves a partial answer on stdout.
pub fn run<S: Solver>(year: u16, day: u8, config: &Config) -> Result<Report, CliError> {
    debug!(path = %config.input_path.display(), "loading input");
    let raw = load_input(&config.input_path)?;

    let mut instance = SolverInstance::<S>::new(year, day, raw.as_str())?;
    debug!(
        parse_us = instance.parse_duration().num_microseconds(),
        "parsed input"
    );

    let results = instance.solve_all(config.parts(instance.parts()))?;
    for result in &results {
        info!(
            part = result.part,
            solve_us = result.duration().num_microseconds(),
            "solved"
        );
    }

    Ok(Report {
        year,
        day,
        parse_duration: instance.parse_duration(),
        results,
    })
}

/// Entry point shared by every puzzle binary
pub fn run_main<S: Solver>(year: u16, day: u8) -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version land here too
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let config = Config::from_args(args, year, day);
    logging::init(config.verbose);

    let outcome = run::<S>(year, day, &config).and_then(|report| {
        let mut stdout = std::io::stdout().lock();
        OutputFormatter::new(config.quiet).write_report(&mut stdout, &report)?;
        stdout.flush()?;
        Ok(())
    });

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error[{}]: {}", e.category(), e);
            ExitCode::from(e.exit_code())
        }
    }
}
