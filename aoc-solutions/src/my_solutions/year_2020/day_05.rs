//! Day 5: Binary Boarding

use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::parse_lines;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Decode a `F/B` x7 + `L/R` x3 boarding pass into `row * 8 + column`
///
/// The code is the seat id written in binary with `B`/`R` as ones.
fn seat_id(code: &str) -> anyhow::Result<u16> {
    if code.len() != 10 {
        return Err(anyhow!("boarding pass must be 10 characters"));
    }
    code.bytes().enumerate().try_fold(0u16, |id, (idx, b)| {
        let bit = match (idx, b) {
            (0..7, b'F') | (7.., b'L') => 0,
            (0..7, b'B') | (7.., b'R') => 1,
            _ => return Err(anyhow!("unexpected `{}` at position {}", b as char, idx + 1)),
        };
        Ok(id << 1 | bit)
    })
}

impl AocParser for Solver {
    /// Seat ids, sorted ascending
    type SharedData<'a> = Vec<u16>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut ids = parse_lines(input, |line| seat_id(line.trim()))?;
        ids.sort_unstable();
        Ok(ids)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .last()
            .map(u16::to_string)
            .ok_or_else(|| SolveError::computation("no boarding passes"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .windows(2)
            .find(|pair| pair[1] == pair[0] + 2)
            .map(|pair| (pair[0] + 1).to_string())
            .ok_or_else(|| SolveError::computation("no free seat between two taken seats"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverInstance;

    fn solve(input: &str, part: u8) -> Result<String, SolveError> {
        SolverInstance::<Solver>::new(2020, 5, input)
            .unwrap()
            .solve(part)
            .map(|r| r.answer)
    }

    /// Inverse of `seat_id`
    fn code(id: u16) -> String {
        (0..10)
            .rev()
            .enumerate()
            .map(|(idx, shift)| match (idx < 7, id >> shift & 1) {
                (true, 0) => 'F',
                (true, _) => 'B',
                (false, 0) => 'L',
                (false, _) => 'R',
            })
            .collect()
    }

    #[test]
    fn test_seat_ids() {
        assert_eq!(seat_id("FBFBBFFRLR").unwrap(), 357);
        assert_eq!(seat_id("BFFFBBFRRR").unwrap(), 567);
        assert_eq!(seat_id("FFFBBBFRRR").unwrap(), 119);
        assert_eq!(seat_id("BBFFBBFRLL").unwrap(), 820);
    }

    #[test]
    fn test_part1_example() {
        assert_eq!(solve("BFFFBBFRRR\nFFFBBBFRRR\nBBFFBBFRLL\n", 1).unwrap(), "820");
    }

    #[test]
    fn test_part2_finds_gap() {
        let input = [40, 41, 43, 44, 42 + 4]
            .iter()
            .map(|&id| code(id))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(solve(&input, 2).unwrap(), "42");
    }

    #[test]
    fn test_part2_without_gap_fails() {
        let input = [10, 11, 12].map(code).join("\n");
        assert!(matches!(solve(&input, 2), Err(SolveError::Computation(_))));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Solver::parse("").unwrap_err(), ParseError::EmptyInput);
        assert_eq!(Solver::parse("FBFBBFFRLR\nFBFBBFFRL").unwrap_err().line(), Some(2));
        assert_eq!(Solver::parse("FBFBBFFRLB").unwrap_err().line(), Some(1));
    }
}
