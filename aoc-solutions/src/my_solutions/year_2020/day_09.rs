//! Day 9: Encoding Error

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::parse_values;

/// Window of previous numbers each number must be a pair sum of
pub const PREAMBLE: usize = 25;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xmas {
    numbers: Vec<u64>,
    preamble: usize,
    /// Part 1's answer, reused as part 2's target
    invalid: Option<u64>,
}

impl Xmas {
    fn new(numbers: Vec<u64>, preamble: usize) -> Self {
        Self {
            numbers,
            preamble,
            invalid: None,
        }
    }

    /// First number that is not the sum of two different numbers among
    /// the `preamble` numbers before it
    fn first_invalid(&mut self) -> Result<u64, SolveError> {
        if let Some(invalid) = self.invalid {
            return Ok(invalid);
        }
        let preamble = self.preamble;
        let invalid = self
            .numbers
            .windows(preamble + 1)
            .find_map(|window| {
                let (previous, &[number]) = window.split_at(preamble) else {
                    return None;
                };
                let is_sum = previous.iter().enumerate().any(|(idx, &a)| {
                    previous[idx + 1..]
                        .iter()
                        .any(|&b| a != b && number.checked_sub(a) == Some(b))
                });
                (!is_sum).then_some(number)
            })
            .ok_or_else(|| SolveError::computation("every number is a sum of its preamble"))?;
        Ok(*self.invalid.insert(invalid))
    }

    /// Sum of the smallest and largest number in a contiguous run of at
    /// least two numbers adding up to `target`
    fn weakness(&self, target: u64) -> Result<u64, SolveError> {
        let numbers = &self.numbers;
        let target = u128::from(target);
        // u128 so a window of huge numbers cannot overflow
        let (mut start, mut sum) = (0, 0u128);
        for end in 0..numbers.len() {
            sum += u128::from(numbers[end]);
            while sum > target && start < end {
                sum -= u128::from(numbers[start]);
                start += 1;
            }
            if sum == target && end > start {
                let run = &numbers[start..=end];
                let min = run.iter().min().copied().unwrap_or_default();
                let max = run.iter().max().copied().unwrap_or_default();
                // min + max <= sum of the run == target
                return Ok(min + max);
            }
        }
        Err(SolveError::computation(format!(
            "no contiguous run sums to {target}"
        )))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Xmas;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let numbers = parse_values::<u64>(input)?;
        if numbers.len() <= PREAMBLE {
            return Err(ParseError::MissingData(format!(
                "need more than {PREAMBLE} numbers, got {}",
                numbers.len()
            )));
        }
        Ok(Xmas::new(numbers, PREAMBLE))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.first_invalid()?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let target = shared.first_invalid()?;
        Ok(shared.weakness(target)?.to_string())
    }
}
