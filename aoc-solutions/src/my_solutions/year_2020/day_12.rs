//! Day 12: Rain Risk

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::parse_lines;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move by `(east, north)`
    Shift(i64, i64),
    /// Counter-clockwise quarter turns, `0..4`
    Turn(u8),
    Forward(i64),
}

fn parse_action(line: &str) -> anyhow::Result<Action> {
    let line = line.trim();
    let (code, value) = line
        .split_at_checked(1)
        .ok_or_else(|| anyhow!("expected `<action><value>`"))?;
    let value: i64 = value
        .parse()
        .with_context(|| format!("invalid value `{value}`"))?;
    let quarter_turns = || -> anyhow::Result<u8> {
        if value % 90 != 0 {
            return Err(anyhow!("turns must be multiples of 90 degrees"));
        }
        Ok((value / 90).rem_euclid(4) as u8)
    };
    let negated = || {
        value
            .checked_neg()
            .ok_or_else(|| anyhow!("value `{value}` out of range"))
    };
    Ok(match code {
        "N" => Action::Shift(0, value),
        "S" => Action::Shift(0, negated()?),
        "E" => Action::Shift(value, 0),
        "W" => Action::Shift(negated()?, 0),
        "L" => Action::Turn(quarter_turns()?),
        "R" => Action::Turn((4 - quarter_turns()?) % 4),
        "F" => Action::Forward(value),
        _ => return Err(anyhow!("unknown action `{code}`")),
    })
}

type Vector = (i64, i64);

/// Rotate `(east, north)` counter-clockwise by quarter turns
fn rotate(vector: Vector, quarter_turns: u8) -> Option<Vector> {
    (0..quarter_turns).try_fold(vector, |(e, n), _| Some((n.checked_neg()?, e)))
}

/// `position + step * times`
fn advance(position: Vector, step: Vector, times: i64) -> Option<Vector> {
    Some((
        position.0.checked_add(step.0.checked_mul(times)?)?,
        position.1.checked_add(step.1.checked_mul(times)?)?,
    ))
}

/// Sail the route; `Shift` moves the ship when `steer_waypoint` is false,
/// the waypoint otherwise. Returns the Manhattan distance travelled.
fn sail(actions: &[Action], waypoint: Vector, steer_waypoint: bool) -> Result<u64, SolveError> {
    let mut ship = (0i64, 0i64);
    let mut waypoint = waypoint;
    for (idx, &action) in actions.iter().enumerate() {
        let moved = match action {
            Action::Shift(de, dn) if steer_waypoint => {
                advance(waypoint, (de, dn), 1).map(|next| waypoint = next)
            }
            Action::Shift(de, dn) => advance(ship, (de, dn), 1).map(|next| ship = next),
            Action::Turn(quarters) => rotate(waypoint, quarters).map(|next| waypoint = next),
            Action::Forward(times) => advance(ship, waypoint, times).map(|next| ship = next),
        };
        if moved.is_none() {
            return Err(SolveError::computation(format!(
                "position overflows at action {}",
                idx + 1
            )));
        }
    }
    ship.0
        .unsigned_abs()
        .checked_add(ship.1.unsigned_abs())
        .ok_or_else(|| SolveError::computation("distance overflows u64"))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Action>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, parse_action)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // The heading is a unit waypoint that never shifts
        Ok(sail(shared, (1, 0), false)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sail(shared, (10, 1), true)?.to_string())
    }
}
