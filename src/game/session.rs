use rand::Rng;

use crate::{
    error::Result,
    generators::generate,
    maze::{Direction, Maze, Position},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// Terminal until the session is restarted.
    Won,
}

/// What happened to a requested move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player stepped into the neighboring cell.
    Moved(Position),
    /// The player stepped onto the goal.
    Won(Position),
    /// A wall or the maze boundary is in the way. Nothing changed.
    Blocked,
    /// The session is already won. Nothing changed.
    Finished,
}

impl MoveOutcome {
    /// Whether the move changed the session.
    pub fn changed(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_) | MoveOutcome::Won(_))
    }
}

/// Read-only view of a session handed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub maze: &'a Maze,
    pub player: Position,
    pub goal: Position,
    pub won: bool,
    pub moves: u32,
    trail: &'a [bool],
}

impl Snapshot<'_> {
    /// Whether the player has left a breadcrumb on `coord`.
    pub fn on_trail(&self, coord: Position) -> bool {
        self.maze.is_in_bounds(coord) && self.trail[self.maze.ravel_index(coord)]
    }
}

/// One playthrough of a single maze.
#[derive(Debug, Clone)]
pub struct Session {
    /// The maze being played, never mutated after generation
    maze: Maze,
    /// Tracks where the player currently is
    player: Position,
    /// Goal position, always the bottom right cell
    goal: Position,
    status: GameStatus,
    /// Number of accepted moves
    moves: u32,
    /// Cells the player walked through on the way to the current position
    trail: Box<[bool]>,
}

impl Session {
    /// Set up a session on a freshly generated maze, with the player on the top left cell and
    /// the goal on the bottom right one.
    ///
    /// A 1x1 maze starts on its own goal, so such a session is [`GameStatus::Won`] right away.
    pub fn new<R: Rng + ?Sized>(rows: u8, cols: u8, rng: &mut R) -> Result<Self> {
        let maze = generate(rows, cols, rng)?;
        Ok(Session::from_maze(maze))
    }

    /// Set up a session on an already generated maze.
    pub fn from_maze(maze: Maze) -> Self {
        let start = (0, 0);
        let goal = (maze.width() - 1, maze.height() - 1);
        let trail = vec![false; maze.len()].into_boxed_slice();
        let status = if start == goal {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };
        tracing::info!(
            "[session] new {}x{} maze, goal at {:?}",
            maze.width(),
            maze.height(),
            goal
        );
        Session {
            maze,
            player: start,
            goal,
            status,
            moves: 0,
            trail,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the goal has been reached.
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            maze: &self.maze,
            player: self.player,
            goal: self.goal,
            won: self.is_won(),
            moves: self.moves,
            trail: &self.trail,
        }
    }

    /// Attempt to move the player one cell in `direction`.
    ///
    /// Blocked moves and moves after the win leave the session untouched. A successful move
    /// drops a breadcrumb on the cell being left, or picks it back up when stepping back onto
    /// the trail.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.is_won() {
            return MoveOutcome::Finished;
        }
        if !self.maze.is_open(self.player, direction) {
            tracing::debug!("[session] move {} from {:?} blocked", direction, self.player);
            return MoveOutcome::Blocked;
        }
        let Some(next) = self.maze.neighbor(self.player, direction) else {
            return MoveOutcome::Blocked;
        };

        let current_idx = self.maze.ravel_index(self.player);
        let next_idx = self.maze.ravel_index(next);
        if self.trail[next_idx] {
            // Walking back over the trail, pick up the breadcrumbs
            self.trail[next_idx] = false;
            self.trail[current_idx] = false;
        } else {
            self.trail[current_idx] = true;
        }

        tracing::debug!("[session] moving {} to {:?}", direction, next);
        self.player = next;
        self.moves += 1;

        if self.player == self.goal {
            tracing::info!("[session] goal reached in {} moves", self.moves);
            self.status = GameStatus::Won;
            MoveOutcome::Won(next)
        } else {
            MoveOutcome::Moved(next)
        }
    }

    /// Replace this session with a fresh one on a new maze of the same dimensions.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        tracing::info!("[session] restarting");
        *self = Session::new(self.maze.height(), self.maze.width(), rng)?;
        Ok(())
    }
}
