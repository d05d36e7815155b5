mod renderer;

pub use renderer::{Tile, TerminalRenderer, lattice_size, tile_at};

use std::io::{Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    config::GameConfig,
    error::Result,
    game::{Game, MoveOutcome},
    generators::get_rng,
    maze::Direction,
};

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

/// Map a key to a game command. Unbound keys map to `None`.
pub fn key_to_command(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Char(c) => Direction::try_from(c).ok().map(Command::Move),
        _ => None,
    }
}

pub struct App {
    config: GameConfig,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Check whether the terminal can show the whole maze plus the status rows.
    fn fits_terminal(&self) -> std::io::Result<bool> {
        let (term_width, term_height) = terminal::size()?;
        let needed_width = (self.config.cols as u16 * 2 + 1) * Tile::WIDTH;
        let needed_height =
            self.config.rows as u16 * 2 + 1 + TerminalRenderer::<Stdout>::NUM_LOG_ROWS;
        Ok(term_width >= needed_width && term_height >= needed_height)
    }

    /// Wait for the user to press the Esc key
    /// This function blocks until Esc is pressed
    fn wait_for_esc() -> std::io::Result<()> {
        loop {
            if let Event::Key(event::KeyEvent { code, kind, .. }) = event::read()?
                && code == KeyCode::Esc
                && kind == KeyEventKind::Press
            {
                break;
            }
        }
        Ok(())
    }

    /// Main game loop. Blocks on key presses and feeds them to the game one at a time,
    /// until the user quits.
    pub fn run(&self, stdout: &mut Stdout) -> Result<()> {
        if !self.fits_terminal()? {
            queue!(
                stdout,
                style::PrintStyledContent(
                    "Terminal size is too small for the maze dimensions to display. Please resize the terminal or pick a smaller maze.\r\n"
                        .with(Color::Yellow)
                        .attribute(Attribute::Bold)
                ),
                style::PrintStyledContent(
                    "Press Esc to exit...\r\n"
                        .with(Color::Blue)
                        .attribute(Attribute::Bold)
                )
            )?;
            stdout.flush()?;
            App::wait_for_esc()?;
            return Ok(());
        }

        tracing::info!(
            "[app] starting game with maze size {}x{} and seed {:?}",
            self.config.cols,
            self.config.rows,
            self.config.seed
        );

        let renderer = TerminalRenderer::new(std::io::stdout(), self.config.seed);
        let mut game = Game::new(
            self.config.rows,
            self.config.cols,
            get_rng(self.config.seed),
            renderer,
            self.config.scoring,
        )?;
        let mut escaped = 0u32;
        if game.session().is_won() {
            escaped += 1;
        }

        loop {
            if let Some(e) = game.observer_mut().take_error() {
                return Err(e.into());
            }

            let Event::Key(key_event) = event::read()? else {
                continue;
            };
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            match key_to_command(key_event.code) {
                Some(Command::Move(direction)) => {
                    if let MoveOutcome::Won(_) = game.apply_move(direction) {
                        escaped += 1;
                    }
                }
                Some(Command::Restart) => {
                    game.restart()?;
                    if game.session().is_won() {
                        escaped += 1;
                    }
                }
                Some(Command::Quit) => break,
                None => {}
            }
        }

        tracing::info!("[app] exiting after {} escaped mazes", escaped);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_moves() {
        assert_eq!(key_to_command(KeyCode::Up), Some(Command::Move(Direction::Up)));
        assert_eq!(key_to_command(KeyCode::Right), Some(Command::Move(Direction::Right)));
        assert_eq!(key_to_command(KeyCode::Down), Some(Command::Move(Direction::Down)));
        assert_eq!(key_to_command(KeyCode::Left), Some(Command::Move(Direction::Left)));
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(key_to_command(KeyCode::Char('w')), Some(Command::Move(Direction::Up)));
        assert_eq!(key_to_command(KeyCode::Char('a')), Some(Command::Move(Direction::Left)));
        assert_eq!(key_to_command(KeyCode::Char('r')), Some(Command::Restart));
        assert_eq!(key_to_command(KeyCode::Char('q')), Some(Command::Quit));
        assert_eq!(key_to_command(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(key_to_command(KeyCode::Char('x')), None);
        assert_eq!(key_to_command(KeyCode::Tab), None);
    }
}
