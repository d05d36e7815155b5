use std::collections::VecDeque;

use crate::maze::{Maze, Position};

/// Breadth-first search from `start` to `goal` through open passages.
/// Returns the cells along the shortest route, both ends included.
pub fn solve_bfs(maze: &Maze, start: Position, goal: Position) -> Option<Vec<Position>> {
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(goal) {
        return None;
    }

    // parent[i] is the cell we came from when first reaching cell i
    let mut parent: Vec<Option<Position>> = vec![None; maze.len()];
    let mut seen = vec![false; maze.len()];
    seen[maze.ravel_index(start)] = true;

    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        if current == goal {
            // Walk the parent links back to the start
            let mut route = vec![current];
            let mut cursor = current;
            while let Some(prev) = parent[maze.ravel_index(cursor)] {
                route.push(prev);
                cursor = prev;
            }
            route.reverse();
            return Some(route);
        }

        for next in maze.open_neighbors(current) {
            let idx = maze.ravel_index(next);
            if !seen[idx] {
                seen[idx] = true;
                parent[idx] = Some(current);
                queue.push_back(next);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;

    #[test]
    fn test_route_through_corridor() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.carve((0, 0), Direction::Down);
        maze.carve((0, 1), Direction::Right);
        maze.carve((1, 1), Direction::Up);
        let route = solve_bfs(&maze, (0, 0), (1, 0)).unwrap();
        assert_eq!(route, vec![(0, 0), (0, 1), (1, 1), (1, 0)]);
    }

    #[test]
    fn test_walled_off_goal_is_unreachable() {
        let maze = Maze::new(2, 2).unwrap();
        assert_eq!(solve_bfs(&maze, (0, 0), (1, 1)), None);
        assert_eq!(solve_bfs(&maze, (0, 0), (0, 0)), Some(vec![(0, 0)]));
    }
}
