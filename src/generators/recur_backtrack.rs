use rand::Rng;

use crate::maze::{Maze, get_neighbors};

/// Carves a perfect maze with the randomized iterative backtracker.
///
/// Starting from `(0, 0)`, repeatedly steps from the top of the stack into a random unvisited
/// neighbor, opening the wall in between, and pops when no unvisited neighbor is left. Every
/// cell is pushed exactly once, so `len - 1` passages are carved and the result is a spanning
/// tree of the cell grid.
pub fn recursive_backtrack<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) {
    if maze.is_empty() {
        return;
    }

    // Visited flags only live for the duration of the walk
    let mut visited = vec![false; maze.len()];

    let start = (0, 0);
    visited[maze.ravel_index(start)] = true;

    // Initialize the stack with the starting point
    let mut stack = vec![start];
    let mut carved = 0usize;

    while let Some(&cell) = stack.last() {
        let neighbors = get_neighbors(cell, maze)
            .filter(|&(coord, _)| !visited[maze.ravel_index(coord)])
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let (neighbor, direction) = neighbors[rng.random_range(0..neighbors.len())];
        maze.carve(cell, direction);
        carved += 1;
        visited[maze.ravel_index(neighbor)] = true;
        // Carve the maze further in that neighbor's direction
        stack.push(neighbor);
    }

    tracing::debug!(
        "[generator] carved {} passages over {}x{} cells",
        carved,
        maze.width(),
        maze.height()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_every_cell_gets_an_opening() {
        let mut maze = Maze::new(7, 9).unwrap();
        recursive_backtrack(&mut maze, &mut StdRng::seed_from_u64(7));
        assert!(
            maze.positions()
                .all(|coord| maze.cell(coord).unwrap().openings() > 0)
        );
        assert_eq!(maze.passages(), 7 * 9 - 1);
    }

    #[test]
    fn test_single_row_is_a_corridor() {
        let mut maze = Maze::new(1, 6).unwrap();
        recursive_backtrack(&mut maze, &mut StdRng::seed_from_u64(1));
        // In a single row the only spanning tree is the straight corridor
        for x in 0..5 {
            assert!(maze.is_open((x, 0), crate::maze::Direction::Right));
        }
    }
}
