pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use error::{MazeError, Result};
pub use game::{Game, GameObserver, MoveOutcome, Session, Snapshot};
pub use generators::generate;
pub use maze::{Cell, Direction, Maze, Position};
