mod session;

pub use session::{GameStatus, MoveOutcome, Session, Snapshot};

use rand::Rng;

use crate::{error::Result, maze::Direction};

/// Receives state changes of a [`Game`]. This is the seam renderers plug into.
pub trait GameObserver {
    /// Called after construction and after every change of the session.
    /// `grid_changed` is set whenever the maze itself was (re)generated.
    fn on_change(&mut self, snapshot: &Snapshot<'_>, grid_changed: bool);

    /// Called exactly once per session, when it is won.
    fn on_complete(&mut self, _won: bool, _score: u32) {}
}

/// Observer that ignores everything, for headless play.
impl GameObserver for () {
    fn on_change(&mut self, _snapshot: &Snapshot<'_>, _grid_changed: bool) {}
}

/// How many points a finished session is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorePolicy {
    pub win_points: u32,
}

impl ScorePolicy {
    pub fn score(&self, session: &Session) -> u32 {
        if session.is_won() { self.win_points } else { 0 }
    }
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self { win_points: 100 }
    }
}

/// Drives a [`Session`]: owns its random source, forwards every change to the observer and
/// reports completion once per session.
pub struct Game<R: Rng, O: GameObserver> {
    session: Session,
    rng: R,
    observer: O,
    scoring: ScorePolicy,
    /// Whether `on_complete` already fired for the current session
    completion_reported: bool,
}

impl<R: Rng, O: GameObserver> Game<R, O> {
    /// Start a game on a fresh `rows` x `cols` maze and emit its first snapshot.
    pub fn new(rows: u8, cols: u8, mut rng: R, observer: O, scoring: ScorePolicy) -> Result<Self> {
        let session = Session::new(rows, cols, &mut rng)?;
        let mut game = Game {
            session,
            rng,
            observer,
            scoring,
            completion_reported: false,
        };
        game.emit(true);
        Ok(game)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Apply a move to the current session, notifying the observer if anything changed.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.session.apply_move(direction);
        if outcome.changed() {
            self.emit(false);
        }
        outcome
    }

    /// Throw the current session away and start over on a new maze of the same size.
    pub fn restart(&mut self) -> Result<()> {
        self.session.restart(&mut self.rng)?;
        self.completion_reported = false;
        self.emit(true);
        Ok(())
    }

    fn emit(&mut self, grid_changed: bool) {
        self.observer
            .on_change(&self.session.snapshot(), grid_changed);
        if self.session.is_won() && !self.completion_reported {
            self.completion_reported = true;
            let score = self.scoring.score(&self.session);
            tracing::info!("[game] session complete, score {}", score);
            self.observer.on_complete(true, score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generators::get_rng, solvers::shortest_path};

    #[derive(Default)]
    struct Recorder {
        changes: Vec<(crate::maze::Position, bool, bool)>,
        completions: Vec<(bool, u32)>,
    }

    impl GameObserver for Recorder {
        fn on_change(&mut self, snapshot: &Snapshot<'_>, grid_changed: bool) {
            self.changes.push((snapshot.player, snapshot.won, grid_changed));
        }

        fn on_complete(&mut self, won: bool, score: u32) {
            self.completions.push((won, score));
        }
    }

    fn direction_between(from: crate::maze::Position, to: crate::maze::Position) -> Direction {
        match (to.0 as i16 - from.0 as i16, to.1 as i16 - from.1 as i16) {
            (0, -1) => Direction::Up,
            (1, 0) => Direction::Right,
            (0, 1) => Direction::Down,
            (-1, 0) => Direction::Left,
            step => panic!("cells are not adjacent: {:?}", step),
        }
    }

    #[test]
    fn test_initial_snapshot_is_emitted() {
        let game = Game::new(3, 3, get_rng(Some(5)), Recorder::default(), ScorePolicy::default())
            .unwrap();
        assert_eq!(game.observer().changes, vec![((0, 0), false, true)]);
        assert!(game.observer().completions.is_empty());
    }

    #[test]
    fn test_blocked_moves_are_not_emitted() {
        let mut game =
            Game::new(3, 3, get_rng(Some(5)), Recorder::default(), ScorePolicy::default())
                .unwrap();
        // Up from the top left corner always hits the boundary
        assert_eq!(game.apply_move(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(game.observer().changes.len(), 1);
    }

    #[test]
    fn test_completion_fires_once_with_score() {
        let scoring = ScorePolicy { win_points: 250 };
        let mut game = Game::new(5, 4, get_rng(Some(9)), Recorder::default(), scoring).unwrap();
        let route = shortest_path(game.session().maze(), (0, 0), game.session().goal()).unwrap();
        for step in route.windows(2) {
            game.apply_move(direction_between(step[0], step[1]));
        }
        assert!(game.session().is_won());
        // Further input after the win changes nothing
        for dir in Direction::ALL {
            assert_eq!(game.apply_move(dir), MoveOutcome::Finished);
        }
        assert_eq!(game.observer().completions, vec![(true, 250)]);
        assert_eq!(game.observer().changes.len(), route.len());
    }

    #[test]
    fn test_restart_rearms_completion() {
        let mut game =
            Game::new(1, 1, get_rng(Some(1)), Recorder::default(), ScorePolicy::default())
                .unwrap();
        assert_eq!(game.observer().completions, vec![(true, 100)]);
        game.restart().unwrap();
        assert_eq!(game.observer().completions, vec![(true, 100), (true, 100)]);
        assert_eq!(
            game.observer().changes,
            vec![((0, 0), true, true), ((0, 0), true, true)]
        );
    }

    #[test]
    fn test_headless_observer() {
        let mut game = Game::new(2, 2, get_rng(Some(2)), (), ScorePolicy::default()).unwrap();
        game.restart().unwrap();
        assert_eq!(game.session().player(), (0, 0));
    }
}
