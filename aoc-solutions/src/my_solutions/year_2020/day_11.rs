//! Day 11: Seating System

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::grid::{DIRECTIONS_8, Grid};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Floor,
    Empty,
    Occupied,
}

/// Which seats a seat looks at when deciding to move
#[derive(Debug, Clone, Copy)]
enum Visibility {
    /// The eight touching cells
    Adjacent,
    /// The first seat in each of the eight directions
    LineOfSight,
}

/// For every seat, the indices of the seats it watches
fn watched_seats(layout: &Grid<Cell>, visibility: Visibility) -> Vec<Vec<usize>> {
    let index = |row: usize, col: usize| row * layout.width() + col;
    layout
        .iter()
        .map(|((row, col), &cell)| {
            if cell == Cell::Floor {
                return Vec::new();
            }
            DIRECTIONS_8
                .iter()
                .filter_map(|&(dr, dc)| {
                    let (mut r, mut c) = (row as isize + dr, col as isize + dc);
                    loop {
                        match layout.get_signed(r, c)? {
                            Cell::Floor if matches!(visibility, Visibility::LineOfSight) => {
                                r += dr;
                                c += dc;
                            }
                            Cell::Floor => return None,
                            _ => return Some(index(r as usize, c as usize)),
                        }
                    }
                })
                .collect()
        })
        .collect()
}

/// Apply the seating rules until nothing changes; returns occupied seats
fn settle(layout: &Grid<Cell>, visibility: Visibility, tolerance: usize) -> usize {
    let watched = watched_seats(layout, visibility);
    let is_seat: Vec<bool> = layout.iter().map(|(_, &c)| c != Cell::Floor).collect();
    let mut occupied: Vec<bool> = layout.iter().map(|(_, &c)| c == Cell::Occupied).collect();

    loop {
        let next: Vec<bool> = (0..occupied.len())
            .map(|seat| {
                if !is_seat[seat] {
                    return false;
                }
                let around = watched[seat].iter().filter(|&&other| occupied[other]).count();
                if occupied[seat] {
                    around < tolerance
                } else {
                    around == 0
                }
            })
            .collect();
        if next == occupied {
            return occupied.iter().filter(|&&o| o).count();
        }
        occupied = next;
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<Cell>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input, |c| match c {
            '.' => Some(Cell::Floor),
            'L' => Some(Cell::Empty),
            '#' => Some(Cell::Occupied),
            _ => None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(settle(shared, Visibility::Adjacent, 4).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(settle(shared, Visibility::LineOfSight, 5).to_string())
    }
}
