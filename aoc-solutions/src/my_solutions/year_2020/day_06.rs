//! Day 6: Custom Customs

use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::{at_line, blank_line_groups, non_empty};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// One person's `yes` answers, bit `n` set for question `'a' + n`
type Answers = u32;

fn parse_person(line: &str) -> anyhow::Result<Answers> {
    line.trim().bytes().try_fold(0, |set, b| {
        if b.is_ascii_lowercase() {
            Ok(set | 1 << (b - b'a'))
        } else {
            Err(anyhow!("questions are `a` to `z`"))
        }
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<Answers>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        blank_line_groups(non_empty(input)?)
            .into_iter()
            .map(|group| {
                group
                    .into_iter()
                    .map(|(line, text)| at_line(line, text, parse_person(text)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|group| group.iter().fold(0, |acc, p| acc | p).count_ones())
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|group| group.iter().fold(Answers::MAX, |acc, p| acc & p).count_ones())
            .sum();
        Ok(total.to_string())
    }
}
