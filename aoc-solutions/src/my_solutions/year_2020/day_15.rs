//! Day 15: Rambunctious Recitation

use std::collections::HashMap;

use anyhow::Context;
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::{at_line, non_empty};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Number spoken on the 1-based `turn`
///
/// After the starting numbers, each turn speaks 0 if the previous number
/// was new, otherwise how many turns apart its last two mentions were.
fn spoken_at(start: &[u32], turn: u32) -> Result<u32, SolveError> {
    let Some((&first_spoken, earlier)) = start.split_last() else {
        return Err(SolveError::computation("no starting numbers"));
    };
    if turn == 0 {
        return Err(SolveError::computation("turns start at 1"));
    }
    if let Some(&number) = start.get(turn as usize - 1) {
        return Ok(number);
    }

    // Every number the game produces is below `turn`; only starting
    // numbers can reach past the table
    let mut last_turn = vec![0u32; turn as usize];
    let mut beyond_table: HashMap<u32, u32> = HashMap::new();
    // Record `number` as spoken on `now`; 0 means never spoken before
    let mut speak = |number: u32, now: u32| match last_turn.get_mut(number as usize) {
        Some(slot) => std::mem::replace(slot, now),
        None => beyond_table.insert(number, now).unwrap_or(0),
    };
    for (idx, &number) in earlier.iter().enumerate() {
        speak(number, idx as u32 + 1);
    }

    let mut current = first_spoken;
    for now in start.len() as u32..turn {
        let previous = speak(current, now);
        current = if previous == 0 { 0 } else { now - previous };
    }
    Ok(current)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = non_empty(input)?.trim();
        if input.lines().count() > 1 {
            return Err(ParseError::InvalidFormat(
                "starting numbers must be on one line".into(),
            ));
        }
        input
            .split(',')
            .map(|token| {
                let token = token.trim();
                at_line(
                    1,
                    token,
                    token
                        .parse::<u32>()
                        .with_context(|| "starting numbers are non-negative integers"),
                )
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spoken_at(shared, 2020)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spoken_at(shared, 30_000_000)?.to_string())
    }
}
