//! Dense 2D character grids

use aoc_solver::ParseError;

use super::parsing::{non_empty, numbered_lines};

/// The eight neighbouring offsets as `(row, col)` deltas
pub const DIRECTIONS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Row-major grid with a fixed width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Parse a rectangular block of lines, mapping each character with `cell`
    ///
    /// `cell` returns `None` for characters the puzzle does not allow.
    pub fn parse<F>(input: &str, mut cell: F) -> Result<Self, ParseError>
    where
        F: FnMut(char) -> Option<T>,
    {
        let input = non_empty(input)?.trim_end();
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;

        for (line, text) in numbered_lines(input) {
            let text = text.trim_end();
            let expected = *width.get_or_insert(text.chars().count());
            if text.chars().count() != expected {
                return Err(ParseError::at_line(
                    line,
                    text,
                    format!("expected {expected} columns"),
                ));
            }
            for c in text.chars() {
                let value = cell(c).ok_or_else(|| {
                    ParseError::at_line(line, c.to_string(), "unexpected grid character")
                })?;
                cells.push(value);
            }
            height += 1;
        }

        Ok(Self {
            width: width.unwrap_or(0),
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.height && col < self.width {
            self.cells.get(row * self.width + col)
        } else {
            None
        }
    }

    /// Cell at a signed position, `None` off the grid
    pub fn get_signed(&self, row: isize, col: isize) -> Option<&T> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.get(row, col)
    }

    /// Cells in row-major order with their `(row, col)` position
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| ((idx / self.width, idx % self.width), cell))
    }

    /// Build a same-shaped grid by mapping every position
    pub fn map_positions<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(usize, usize, &T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.iter().map(|((r, c), cell)| f(r, c, cell)).collect(),
        }
    }
}
