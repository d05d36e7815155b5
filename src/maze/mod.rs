pub mod cell;
mod direction;

use std::fmt;

pub use cell::Cell;
pub use direction::Direction;

use crate::error::{MazeError, Result};

/// A cell coordinate `(x, y)`, with `x` the column and `y` the row.
pub type Position = (u8, u8);

/// A rectangular grid of cells whose walls describe the maze topology.
///
/// Each passage is stored twice, once on each of the two cells it joins. Every
/// mutation goes through [`Maze::carve`], which keeps both sides in agreement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Box<[Cell]>,
    width: u8,
    height: u8,
}

impl Maze {
    /// Creates a `rows` x `cols` maze with every wall standing.
    ///
    /// Fails with [`MazeError::InvalidDimensions`] if either dimension is 0.
    pub fn new(rows: u8, cols: u8) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let cells = vec![Cell::CLOSED; rows as usize * cols as usize].into_boxed_slice();
        Ok(Maze {
            cells,
            width: cols,
            height: rows,
        })
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Position) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    pub(crate) fn ravel_index(&self, coord: Position) -> usize {
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// Returns the cell at `coord`, or `None` if it is out of bounds.
    pub fn cell(&self, coord: Position) -> Option<&Cell> {
        self.is_in_bounds(coord)
            .then(|| &self.cells[self.ravel_index(coord)])
    }

    /// The in-bounds cell one step from `coord` in `direction`, ignoring walls.
    pub fn neighbor(&self, coord: Position, direction: Direction) -> Option<Position> {
        let (x, y) = coord;
        // wrapping_sub turns -1 into u8::MAX and saturating_add caps at u8::MAX; both fall
        // outside the largest possible dimension and are filtered by the bounds check.
        let next = match direction {
            Direction::Up => (x, y.wrapping_sub(1)),
            Direction::Right => (x.saturating_add(1), y),
            Direction::Down => (x, y.saturating_add(1)),
            Direction::Left => (x.wrapping_sub(1), y),
        };
        (self.is_in_bounds(coord) && self.is_in_bounds(next)).then_some(next)
    }

    /// Checks whether a step from `coord` in `direction` is allowed: the cell has no
    /// wall on that side and the destination is inside the maze.
    pub fn is_open(&self, coord: Position, direction: Direction) -> bool {
        match (self.cell(coord), self.neighbor(coord, direction)) {
            (Some(cell), Some(_)) => !cell.has_wall(direction),
            _ => false,
        }
    }

    /// Removes the wall between `from` and its neighbor in `direction`, on both cells.
    ///
    /// Returns `true` if a wall was removed, `false` if the passage was already open or the
    /// neighbor lies outside the maze (boundary walls are never carved).
    pub fn carve(&mut self, from: Position, direction: Direction) -> bool {
        let Some(to) = self.neighbor(from, direction) else {
            return false;
        };
        let from_idx = self.ravel_index(from);
        let to_idx = self.ravel_index(to);
        if !self.cells[from_idx].has_wall(direction) {
            return false;
        }
        self.cells[from_idx].set_wall(direction, false);
        self.cells[to_idx].set_wall(direction.opposite(), false);
        true
    }

    /// Positions reachable from `coord` in a single step.
    pub fn open_neighbors(&self, coord: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| self.is_open(coord, dir))
            .filter_map(move |dir| self.neighbor(coord, dir))
    }

    /// Number of open passages between adjacent cells. Each passage is counted once.
    pub fn passages(&self) -> usize {
        self.positions()
            .map(|coord| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&dir| self.is_open(coord, dir))
                    .count()
            })
            .sum()
    }

    /// All cell coordinates in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

/// Get neighbors of a cell together with the direction leading to each.
/// A neighbor is a cell one step away in the cardinal directions, walls ignored.
pub fn get_neighbors(coord: Position, maze: &Maze) -> impl Iterator<Item = (Position, Direction)> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |dir| maze.neighbor(coord, dir).map(|next| (next, dir)))
}

/// Plain ASCII drawing: `+---+` for horizontal walls and `|` for vertical ones.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let wall = self.cells[self.ravel_index((x, y))].north;
                write!(f, "+{}", if wall { "---" } else { "   " })?;
            }
            writeln!(f, "+")?;
            for x in 0..self.width {
                let wall = self.cells[self.ravel_index((x, y))].west;
                write!(f, "{}   ", if wall { '|' } else { ' ' })?;
            }
            let last = self.cells[self.ravel_index((self.width - 1, y))];
            writeln!(f, "{}", if last.east { '|' } else { ' ' })?;
        }
        for x in 0..self.width {
            let wall = self.cells[self.ravel_index((x, self.height - 1))].south;
            write!(f, "+{}", if wall { "---" } else { "   " })?;
        }
        writeln!(f, "+")
    }
}
