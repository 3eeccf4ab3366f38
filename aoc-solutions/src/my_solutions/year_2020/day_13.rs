//! Day 13: Shuttle Search

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::{at_line, non_empty};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notes {
    earliest: u64,
    /// `(offset, id)` for every bus in service; `x` slots are skipped
    buses: Vec<(u64, u64)>,
}

fn parse_buses(line: &str) -> anyhow::Result<Vec<(u64, u64)>> {
    let buses = line
        .trim()
        .split(',')
        .enumerate()
        .filter(|&(_, slot)| slot != "x")
        .map(|(offset, slot)| {
            let id: u64 = slot
                .parse()
                .with_context(|| format!("invalid bus id `{slot}`"))?;
            if id == 0 {
                return Err(anyhow!("bus id must be positive"));
            }
            Ok((offset as u64, id))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if buses.is_empty() {
        return Err(anyhow!("no bus in service"));
    }
    Ok(buses)
}

/// `(g, x, y)` with `a * x + b * y = g = gcd(a, b)`
fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    if b == 0 {
        (a, 1, 0)
    } else {
        let (g, x, y) = extended_gcd(b, a % b);
        (g, y, x - (a / b) * y)
    }
}

/// Smallest `t >= 0` with `t = r (mod m)` for every `(r, m)` pair
fn chinese_remainder(congruences: &[(i128, i128)]) -> Result<i128, SolveError> {
    congruences
        .iter()
        .try_fold((0i128, 1i128), |(t, modulus), &(r, m)| {
            let (g, inverse, _) = extended_gcd(modulus % m, m);
            if g != 1 {
                return Err(SolveError::computation(format!(
                    "bus ids {modulus} and {m} are not coprime"
                )));
            }
            // t + modulus * k = r (mod m)
            let k = ((r - t).rem_euclid(m) * inverse.rem_euclid(m)).rem_euclid(m);
            Ok((t + modulus * k, modulus * m))
        })
        .map(|(t, _)| t)
}

impl AocParser for Solver {
    type SharedData<'a> = Notes;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = non_empty(input)?.lines();
        let first = lines.next().unwrap_or_default();
        let earliest = at_line(
            1,
            first,
            first.trim().parse::<u64>().map_err(anyhow::Error::from),
        )?;
        let second = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("bus schedule line".into()))?;
        let buses = at_line(2, second, parse_buses(second))?;
        if let Some((extra, text)) = lines
            .enumerate()
            .find(|(_, text)| !text.trim().is_empty())
        {
            return Err(ParseError::at_line(extra + 3, text, "unexpected trailing line"));
        }
        Ok(Notes { earliest, buses })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let earliest = shared.earliest;
        shared
            .buses
            .iter()
            .map(|&(_, id)| (id, (id - earliest % id) % id))
            .min_by_key(|&(_, wait)| wait)
            .map(|(id, wait)| (id * wait).to_string())
            .ok_or_else(|| SolveError::computation("no bus in service"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Bus `id` at `offset` departs at t + offset: t = -offset (mod id)
        let congruences: Vec<(i128, i128)> = shared
            .buses
            .iter()
            .map(|&(offset, id)| {
                let (offset, id) = (i128::from(offset), i128::from(id));
                ((-offset).rem_euclid(id), id)
            })
            .collect();
        Ok(chinese_remainder(&congruences)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverInstance;

    const EXAMPLE: &str = "939\n7,13,x,x,59,x,31,19\n";

    fn solve(input: &str, part: u8) -> Result<String, SolveError> {
        SolverInstance::<Solver>::new(2020, 13, input)
            .unwrap()
            .solve(part)
            .map(|r| r.answer)
    }

    #[test]
    fn test_part1_example() {
        assert_eq!(solve(EXAMPLE, 1).unwrap(), "295");
    }

    #[test]
    fn test_part2_examples() {
        assert_eq!(solve(EXAMPLE, 2).unwrap(), "1068781");
        for (schedule, expected) in [
            ("17,x,13,19", "3417"),
            ("67,7,59,61", "754018"),
            ("67,x,7,59,61", "779210"),
            ("67,7,x,59,61", "1261476"),
            ("1789,37,47,1889", "1202161486"),
        ] {
            assert_eq!(solve(&format!("0\n{schedule}"), 2).unwrap(), expected);
        }
    }

    #[test]
    fn test_non_coprime_ids_are_computation_error() {
        assert!(matches!(solve("0\n4,x,6", 2), Err(SolveError::Computation(_))));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Solver::parse("").unwrap_err(), ParseError::EmptyInput);
        assert_eq!(Solver::parse("soon\n7,13").unwrap_err().line(), Some(1));
        assert_eq!(Solver::parse("939\n7,y,13").unwrap_err().line(), Some(2));
        assert_eq!(Solver::parse("939\nx,x").unwrap_err().line(), Some(2));
        assert!(matches!(Solver::parse("939"), Err(ParseError::MissingData(_))));
        assert_eq!(Solver::parse("939\n7\n8").unwrap_err().line(), Some(3));
    }
}
