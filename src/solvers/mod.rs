mod bfs;

pub use bfs::solve_bfs;

use crate::maze::{Maze, Position};

/// Shortest route from `start` to `goal`, if one exists.
/// In a perfect maze this is the unique simple path between the two cells.
pub fn shortest_path(maze: &Maze, start: Position, goal: Position) -> Option<Vec<Position>> {
    solve_bfs(maze, start, goal)
}
