//! Day 1: Report Repair

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::parse_values;

const TARGET: u64 = 2020;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    /// Expenses, sorted ascending
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut expenses = parse_values::<u64>(input)?;
        expenses.sort_unstable();
        Ok(expenses)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        pair_summing_to(shared, TARGET)
            .map(|(a, b)| (a * b).to_string())
            .ok_or_else(|| SolveError::computation(format!("no two entries sum to {TARGET}")))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let expenses: &[u64] = shared;
        expenses
            .iter()
            .enumerate()
            .find_map(|(idx, &first)| {
                let rest = TARGET.checked_sub(first)?;
                pair_summing_to(&expenses[idx + 1..], rest).map(|(a, b)| first * a * b)
            })
            .map(|product| product.to_string())
            .ok_or_else(|| SolveError::computation(format!("no three entries sum to {TARGET}")))
    }
}

/// Two-pointer search over a sorted slice
fn pair_summing_to(sorted: &[u64], target: u64) -> Option<(u64, u64)> {
    let (mut left, mut right) = (0, sorted.len().checked_sub(1)?);
    while left < right {
        // Compare against the remainder so large entries cannot overflow
        let ordering = match target.checked_sub(sorted[left]) {
            Some(rest) => sorted[right].cmp(&rest),
            None => std::cmp::Ordering::Greater,
        };
        match ordering {
            std::cmp::Ordering::Equal => return Some((sorted[left], sorted[right])),
            std::cmp::Ordering::Less => left += 1,
            std::cmp::Ordering::Greater => right -= 1,
        }
    }
    None
}
