use thiserror::Error;

/// Errors produced by maze generation, input parsing and the terminal host.
#[derive(Error, Debug)]
pub enum MazeError {
    /// Both dimensions must be at least 1.
    #[error("invalid maze dimensions {rows}x{cols}: rows and cols must be at least 1")]
    InvalidDimensions { rows: u8, cols: u8 },

    #[error("invalid direction {0:?}: expected one of up, right, down, left")]
    InvalidDirection(String),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
