//! End-to-end pipeline: gzip file -> parser -> parts
//!
//! Writes a compressed input to a temporary directory, loads it back and
//! solves both parts, the same sequence a puzzle binary performs.
//!
//! Run with: cargo run --example gzip_pipeline

use aoc_solver::{
    AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverInstance, load_input,
};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::Write;

/// Depth readings; part 2 reuses the increase count from part 1
#[derive(Debug)]
pub struct Readings {
    depths: Vec<u32>,
    increases: Option<usize>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Sonar;

impl AocParser for Sonar {
    type SharedData<'a> = Readings;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let depths = input
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                line.trim()
                    .parse()
                    .map_err(|e| ParseError::at_line(idx + 1, line, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Readings {
            depths,
            increases: None,
        })
    }
}

impl PartSolver<1> for Sonar {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let depths = &shared.depths;
        let count = *shared
            .increases
            .get_or_insert_with(|| depths.windows(2).filter(|w| w[1] > w[0]).count());
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Sonar {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = shared.depths.len();
        let increases = shared
            .increases
            .ok_or_else(|| SolveError::computation("part 1 has not run"))?;
        Ok(format!("{increases}/{}", total.saturating_sub(1)))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("day01.txt.gz");

    let mut encoder = GzEncoder::new(File::create(&path)?, Compression::default());
    encoder.write_all(b"199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n")?;
    encoder.finish()?;

    let raw = load_input(&path)?;
    let mut instance = SolverInstance::<Sonar>::new(2021, 1, raw.as_str())?;
    println!("Parsed in {}us", instance.parse_duration().num_microseconds().unwrap_or(0));

    for result in instance.solve_all(1..=2)? {
        println!(
            "Part {}: {} ({}us)",
            result.part,
            result.answer,
            result.duration().num_microseconds().unwrap_or(0)
        );
    }

    Ok(())
}
