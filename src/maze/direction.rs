use std::{fmt, str::FromStr};

use crate::error::MazeError;

/// One of the four cardinal moves. `Up` is north, toward row 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in the order neighbors are inspected during generation.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Direction {
    type Err = MazeError;

    /// Accepts full names, compass points and single-letter aliases, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" | "north" | "n" => Ok(Direction::Up),
            "right" | "r" | "east" | "e" => Ok(Direction::Right),
            "down" | "d" | "south" | "s" => Ok(Direction::Down),
            "left" | "l" | "west" | "w" => Ok(Direction::Left),
            _ => Err(MazeError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = MazeError;

    /// Maps the WASD movement keys.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'w' => Ok(Direction::Up),
            'd' => Ok(Direction::Right),
            's' => Ok(Direction::Down),
            'a' => Ok(Direction::Left),
            _ => Err(MazeError::InvalidDirection(c.to_string())),
        }
    }
}
