//! Day 10: Adapter Array

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::dp_cache::{DpCache, VecBackend};
use crate::utils::parsing::parse_values;

/// Largest joltage step an adapter accepts
const MAX_STEP: u64 = 3;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    /// Full chain: outlet (0), adapters ascending, device (max + 3)
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut chain = parse_values::<u64>(input)?;
        chain.push(0);
        chain.sort_unstable();
        if let Some(pair) = chain.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ParseError::InvalidFormat(format!(
                "joltage {} appears twice",
                pair[0]
            )));
        }
        let device = chain.last().copied().unwrap_or_default() + MAX_STEP;
        chain.push(device);
        Ok(chain)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (mut ones, mut threes) = (0u64, 0u64);
        for pair in shared.windows(2) {
            match pair[1] - pair[0] {
                1 => ones += 1,
                2 => {}
                3 => threes += 1,
                gap => {
                    return Err(SolveError::computation(format!(
                        "gap of {gap} jolts after {}",
                        pair[0]
                    )));
                }
            }
        }
        Ok((ones * threes).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let chain: &[u64] = shared;
        // ways(i): arrangements from the outlet up to chain[i]
        let ways = DpCache::from_fns(
            VecBackend::with_capacity(chain.len()),
            |&i: &usize| {
                (i.saturating_sub(MAX_STEP as usize)..i)
                    .filter(|&j| chain[i] - chain[j] <= MAX_STEP)
                    .collect()
            },
            |&i: &usize, deps: &[u64]| if i == 0 { 1 } else { deps.iter().sum() },
        );
        Ok(ways.get(&(chain.len() - 1))?.to_string())
    }
}
