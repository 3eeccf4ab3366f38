//! Day 2: Password Philosophy

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::parse_lines;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// `lo-hi letter: password`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    lo: usize,
    hi: usize,
    letter: u8,
    password: &'a str,
}

impl Entry<'_> {
    /// Letter count within `lo..=hi`
    fn valid_by_count(&self) -> bool {
        let count = self.password.bytes().filter(|&b| b == self.letter).count();
        (self.lo..=self.hi).contains(&count)
    }

    /// Letter at exactly one of the 1-based positions `lo` and `hi`
    fn valid_by_position(&self) -> bool {
        let at = |pos: usize| self.password.as_bytes().get(pos - 1) == Some(&self.letter);
        at(self.lo) != at(self.hi)
    }
}

fn parse_entry(line: &str) -> anyhow::Result<Entry<'_>> {
    let (policy, password) = line
        .split_once(": ")
        .ok_or_else(|| anyhow!("expected `policy: password`"))?;
    let (range, letter) = policy
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected `lo-hi letter`"))?;
    let (lo, hi) = range
        .split_once('-')
        .ok_or_else(|| anyhow!("expected `lo-hi`"))?;
    let lo: usize = lo.parse().context("invalid lower bound")?;
    let hi: usize = hi.parse().context("invalid upper bound")?;
    if lo == 0 || lo > hi {
        return Err(anyhow!("bounds must satisfy 1 <= lo <= hi"));
    }
    let letter = match letter.as_bytes() {
        [b] if b.is_ascii_lowercase() => *b,
        _ => return Err(anyhow!("policy letter must be one lowercase letter")),
    };

    Ok(Entry {
        lo,
        hi,
        letter,
        password,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Entry<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, parse_entry)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|e| e.valid_by_count()).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|e| e.valid_by_position()).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverInstance;

    const EXAMPLE: &str = "1-3 a: abcde\n1-3 b: cdefg\n2-9 c: ccccccccc\n";

    fn solve(input: &str, part: u8) -> String {
        SolverInstance::<Solver>::new(2020, 2, input)
            .unwrap()
            .solve(part)
            .unwrap()
            .answer
    }

    #[test]
    fn test_part1_example() {
        assert_eq!(solve(EXAMPLE, 1), "2");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(solve(EXAMPLE, 2), "1");
    }

    #[test]
    fn test_position_past_end_is_absent() {
        let entry = parse_entry("2-9 a: ba").unwrap();
        assert!(entry.valid_by_position());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Solver::parse("").unwrap_err(), ParseError::EmptyInput);

        let err = Solver::parse("1-3 a: abcde\n3-1 a: aaa").unwrap_err();
        assert_eq!(err.line(), Some(2));

        let err = Solver::parse("1-3 a abcde").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 1, ref token, .. } if token == "1-3 a abcde"));
    }
}
