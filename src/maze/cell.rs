use crate::maze::Direction;

/// One grid unit of the maze with an independent wall flag on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Cell {
    /// A cell with all four walls standing.
    pub const CLOSED: Cell = Cell {
        north: true,
        east: true,
        south: true,
        west: true,
    };

    /// Checks whether a wall stands on the given side.
    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.north,
            Direction::Right => self.east,
            Direction::Down => self.south,
            Direction::Left => self.west,
        }
    }

    pub(crate) fn set_wall(&mut self, direction: Direction, wall: bool) {
        match direction {
            Direction::Up => self.north = wall,
            Direction::Right => self.east = wall,
            Direction::Down => self.south = wall,
            Direction::Left => self.west = wall,
        }
    }

    /// Number of open sides.
    pub fn openings(&self) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&dir| !self.has_wall(dir))
            .count()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::CLOSED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_wall_only_touches_one_side() {
        let mut cell = Cell::CLOSED;
        cell.set_wall(Direction::Right, false);
        assert!(!cell.has_wall(Direction::Right));
        assert!(cell.has_wall(Direction::Up));
        assert!(cell.has_wall(Direction::Down));
        assert!(cell.has_wall(Direction::Left));
        assert_eq!(cell.openings(), 1);
    }
}
