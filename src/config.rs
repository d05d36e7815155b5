use std::path::PathBuf;

use clap::Parser;

use crate::{
    error::{MazeError, Result},
    game::ScorePolicy,
};

/// Find your way from the top left corner to the bottom right one.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Maze height in cells (1-255)
    #[arg(short, long, default_value = "10")]
    pub rows: u8,

    /// Maze width in cells (1-255)
    #[arg(short, long, default_value = "20")]
    pub cols: u8,

    /// Seed for reproducible mazes; random when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Points awarded for escaping a maze
    #[arg(long, default_value = "100")]
    pub win_points: u32,

    /// Directory the log file is written to
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Print one generated maze as ASCII and exit, without entering the game
    #[arg(long)]
    pub print: bool,
}

/// Settings of a game run, validated before any maze is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    pub seed: Option<u64>,
    pub scoring: ScorePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 20,
            seed: None,
            scoring: ScorePolicy::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MazeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl TryFrom<&Cli> for GameConfig {
    type Error = MazeError;

    fn try_from(cli: &Cli) -> Result<Self> {
        let config = GameConfig {
            rows: cli.rows,
            cols: cli.cols,
            seed: cli.seed,
            scoring: ScorePolicy {
                win_points: cli.win_points,
            },
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["maze-escape"]);
        let config = GameConfig::try_from(&cli).unwrap();
        assert_eq!(config, GameConfig::default());
        assert!(!cli.print);
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "maze-escape",
            "-r",
            "4",
            "--cols",
            "7",
            "--seed",
            "99",
            "--win-points",
            "5",
        ]);
        let config = GameConfig::try_from(&cli).unwrap();
        assert_eq!(config.rows, 4);
        assert_eq!(config.cols, 7);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.scoring.win_points, 5);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let cli = Cli::parse_from(["maze-escape", "--rows", "0"]);
        assert!(matches!(
            GameConfig::try_from(&cli),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 20 })
        ));
    }

    #[test]
    fn test_dimension_above_255_rejected_by_parser() {
        assert!(Cli::try_parse_from(["maze-escape", "--cols", "300"]).is_err());
    }
}
