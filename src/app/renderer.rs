use std::{fmt, io::Write};

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color, StyledContent, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    game::{GameObserver, Snapshot},
    maze::{Direction, Position},
};

/// One character cell pair of the on-screen wall lattice.
///
/// The lattice of a `w` x `h` maze is `(2w + 1)` x `(2h + 1)` tiles: cells sit on odd
/// coordinates, walls and corners between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
    /// A breadcrumb or the passage between two breadcrumbs.
    Trail,
    Player,
    Goal,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const WIDTH: u16 = 2;

    fn styled(&self) -> StyledContent<&'static str> {
        match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Empty => "  ".with(Color::Reset),
            Tile::Trail => "* ".with(Color::Blue),
            Tile::Player => "🟡".with(Color::Yellow),
            Tile::Goal => "🟥".with(Color::Red),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = self.styled();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Lattice dimensions `(width, height)` in tiles for a snapshot's maze.
pub fn lattice_size(snapshot: &Snapshot<'_>) -> (u16, u16) {
    (
        snapshot.maze.width() as u16 * 2 + 1,
        snapshot.maze.height() as u16 * 2 + 1,
    )
}

/// Tile shown at lattice coordinate `(gx, gy)`.
pub fn tile_at(snapshot: &Snapshot<'_>, gx: u16, gy: u16) -> Tile {
    let maze = snapshot.maze;
    let marked = |coord: Position| coord == snapshot.player || snapshot.on_trail(coord);

    match (gx % 2, gy % 2) {
        // Corners
        (0, 0) => Tile::Wall,
        // Cell
        (1, 1) => {
            let coord = ((gx / 2) as u8, (gy / 2) as u8);
            if coord == snapshot.player {
                Tile::Player
            } else if coord == snapshot.goal {
                Tile::Goal
            } else if snapshot.on_trail(coord) {
                Tile::Trail
            } else {
                Tile::Empty
            }
        }
        // Wall slot between two cells, or a boundary wall. The slot belongs to the
        // cell on its left (vertical slot) or above it (horizontal slot).
        (h, _) => {
            let (owner, direction) = if h == 0 {
                if gx == 0 {
                    return Tile::Wall;
                }
                (((gx / 2 - 1) as u8, (gy / 2) as u8), Direction::Right)
            } else {
                if gy == 0 {
                    return Tile::Wall;
                }
                (((gx / 2) as u8, (gy / 2 - 1) as u8), Direction::Down)
            };
            match maze.neighbor(owner, direction) {
                Some(other) if maze.is_open(owner, direction) => {
                    if marked(owner) && marked(other) {
                        Tile::Trail
                    } else {
                        Tile::Empty
                    }
                }
                _ => Tile::Wall,
            }
        }
    }
}

/// Draws game snapshots onto a terminal through crossterm.
///
/// Observer callbacks cannot fail, so the first I/O error is kept and handed out through
/// [`TerminalRenderer::take_error`].
pub struct TerminalRenderer<W: Write> {
    out: W,
    /// Lattice height of the last drawn maze, used to place the status lines below it
    lattice_height: u16,
    seed: Option<u64>,
    error: Option<std::io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    /// Number of rows reserved below the maze for status and messages
    pub const NUM_LOG_ROWS: u16 = 3;

    pub fn new(out: W, seed: Option<u64>) -> Self {
        Self {
            out,
            lattice_height: 0,
            seed,
            error: None,
        }
    }

    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, snapshot: &Snapshot<'_>, grid_changed: bool) -> std::io::Result<()> {
        let (width, height) = lattice_size(snapshot);
        if grid_changed {
            queue!(self.out, terminal::Clear(ClearType::All))?;
            self.lattice_height = height;
        }
        for gy in 0..height {
            queue!(self.out, cursor::MoveTo(0, gy))?;
            for gx in 0..width {
                queue!(self.out, style::Print(tile_at(snapshot, gx, gy)))?;
            }
        }
        let seed = match self.seed {
            Some(seed) => format!("seed {}", seed),
            None => "random seed".to_string(),
        };
        let status = format!(
            "Moves: {}  ({})  ←/→/↑/↓ or WASD: move  r: new maze  Esc: exit",
            snapshot.moves, seed
        );
        self.log_line(0, Some(status.with(Color::Cyan)))?;
        if grid_changed {
            self.log_line(1, None::<StyledContent<&str>>)?;
        }
        self.out.flush()
    }

    /// Print `msg` on the `row`-th line below the maze, clearing what was there.
    pub fn log_line<D: fmt::Display>(
        &mut self,
        row: u16,
        msg: Option<StyledContent<D>>,
    ) -> std::io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, self.lattice_height + row),
            terminal::Clear(ClearType::CurrentLine)
        )?;
        if let Some(msg) = msg {
            queue!(self.out, style::PrintStyledContent(msg))?;
        }
        self.out.flush()
    }

    fn record(&mut self, result: std::io::Result<()>) {
        if let Err(e) = result {
            tracing::error!("[render] failed to draw: {}", e);
            self.error.get_or_insert(e);
        }
    }
}

impl<W: Write> GameObserver for TerminalRenderer<W> {
    fn on_change(&mut self, snapshot: &Snapshot<'_>, grid_changed: bool) {
        let result = self.draw(snapshot, grid_changed);
        self.record(result);
    }

    fn on_complete(&mut self, won: bool, score: u32) {
        let msg = if won {
            format!("You escaped! Score: {}. Press r for a new maze, or Esc to exit.", score)
                .with(Color::Green)
                .attribute(Attribute::Bold)
        } else {
            "Maze abandoned.".to_string().with(Color::Red).attribute(Attribute::Bold)
        };
        let result = self.log_line(1, Some(msg));
        self.record(result);
    }
}
