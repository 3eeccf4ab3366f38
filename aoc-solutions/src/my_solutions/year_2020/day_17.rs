//! Day 17: Conway Cubes

use std::collections::{HashMap, HashSet};

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

use crate::utils::grid::Grid;

const CYCLES: usize = 6;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Offsets to every neighbour of a cell in `D` dimensions
fn neighbour_offsets<const D: usize>() -> Vec<[i32; D]> {
    (0..D)
        .map(|_| -1..=1)
        .multi_cartesian_product()
        .filter(|offset| offset.iter().any(|&d| d != 0))
        .map(|offset| {
            let mut cell = [0; D];
            cell.copy_from_slice(&offset);
            cell
        })
        .collect()
}

/// Active cubes after `cycles` rounds, starting from the 2D slice `seed`
fn boot<const D: usize>(seed: &[(i32, i32)], cycles: usize) -> usize {
    let offsets = neighbour_offsets::<D>();
    let mut active: HashSet<[i32; D]> = seed
        .iter()
        .map(|&(x, y)| {
            let mut cell = [0; D];
            cell[0] = x;
            cell[1] = y;
            cell
        })
        .collect();

    for _ in 0..cycles {
        let mut neighbours: HashMap<[i32; D], u8> = HashMap::new();
        for cell in &active {
            for offset in &offsets {
                let mut near = *cell;
                near.iter_mut().zip(offset).for_each(|(c, d)| *c += d);
                *neighbours.entry(near).or_default() += 1;
            }
        }
        active = neighbours
            .into_iter()
            .filter(|(cell, count)| *count == 3 || (*count == 2 && active.contains(cell)))
            .map(|(cell, _)| cell)
            .collect();
    }
    active.len()
}

impl AocParser for Solver {
    /// `(x, y)` of every active cube in the starting slice
    type SharedData<'a> = Vec<(i32, i32)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let slice = Grid::parse(input, |c| match c {
            '#' => Some(true),
            '.' => Some(false),
            _ => None,
        })?;
        Ok(slice
            .iter()
            .filter(|&(_, &on)| on)
            .map(|((row, col), _)| (col as i32, row as i32))
            .collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(boot::<3>(shared, CYCLES).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(boot::<4>(shared, CYCLES).to_string())
    }
}
