//! Day 3: Toboggan Trajectory

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::grid::Grid;

/// `(right, down)` slopes checked by part 2
const SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    /// `true` where a tree stands; the pattern repeats to the right
    type SharedData<'a> = Grid<bool>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input, |c| match c {
            '#' => Some(true),
            '.' => Some(false),
            _ => None,
        })
    }
}

fn trees_on_slope(map: &Grid<bool>, right: usize, down: usize) -> usize {
    (0..map.height())
        .step_by(down)
        .enumerate()
        .filter(|&(step, row)| {
            let col = (step * right) % map.width();
            map.get(row, col).copied().unwrap_or(false)
        })
        .count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(trees_on_slope(shared, 3, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: usize = SLOPES
            .iter()
            .map(|&(right, down)| trees_on_slope(shared, right, down))
            .product();
        Ok(product.to_string())
    }
}
