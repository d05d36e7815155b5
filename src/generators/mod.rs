use rand::{Rng, SeedableRng, rngs::StdRng};

mod recur_backtrack;

pub use recur_backtrack::recursive_backtrack;

use crate::{error::Result, maze::Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generate a `rows` x `cols` perfect maze.
///
/// The same seeded `rng` state and dimensions always yield an identical maze.
pub fn generate<R: Rng + ?Sized>(rows: u8, cols: u8, rng: &mut R) -> Result<Maze> {
    let mut maze = Maze::new(rows, cols)?;
    recursive_backtrack(&mut maze, rng);
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::MazeError, maze::Cell};

    #[test]
    fn test_single_cell_keeps_all_walls() {
        let maze = generate(1, 1, &mut get_rng(Some(0))).unwrap();
        assert_eq!(maze.len(), 1);
        assert_eq!(*maze.cell((0, 0)).unwrap(), Cell::CLOSED);
        assert_eq!(maze.passages(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = generate(0, 0, &mut get_rng(Some(0))).unwrap_err();
        assert!(matches!(err, MazeError::InvalidDimensions { rows: 0, cols: 0 }));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate(12, 17, &mut get_rng(Some(42))).unwrap();
        let b = generate(12, 17, &mut get_rng(Some(42))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unseeded_rng_still_yields_spanning_tree() {
        let maze = generate(6, 5, &mut get_rng(None)).unwrap();
        assert_eq!(maze.passages(), 6 * 5 - 1);
    }
}
