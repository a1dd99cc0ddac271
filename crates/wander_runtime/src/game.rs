//! The main game loop.

use wander_engine::{Outcome, Player};
use wander_world::{Error, Result};

use crate::console::{GameConsole, ReadEvent, RustylineConsole};

/// Printed when the win condition is met.
pub const WINNING_MESSAGE: &str = "You won!";

/// Prompt shown before each command.
const PROMPT: &str = "> ";

/// An interactive session: a player wired to a console.
pub struct Game<'w, C: GameConsole = RustylineConsole> {
    /// The player driving the session.
    player: Player<'w>,

    /// Where input comes from and output goes.
    console: C,
}

impl<'w> Game<'w, RustylineConsole> {
    /// Creates a game on the default interactive console.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails to initialize.
    pub fn new(player: Player<'w>) -> Result<Self> {
        let console = RustylineConsole::new()?;
        Ok(Self::with_console(player, console))
    }
}

impl<'w, C: GameConsole> Game<'w, C> {
    /// Creates a game on the given console.
    pub fn with_console(player: Player<'w>, console: C) -> Self {
        Self { player, console }
    }

    /// Returns a reference to the player.
    #[must_use]
    pub const fn player(&self) -> &Player<'w> {
        &self.player
    }

    /// Returns a reference to the console.
    #[must_use]
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Runs the session until the player wins, quits, or input ends.
    ///
    /// Recoverable command errors are written to the console and play
    /// continues. Ctrl+C cancels the current line; Ctrl+D ends the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or a command reports an
    /// internal error.
    pub fn play(&mut self) -> Result<()> {
        self.console.set_vocabulary(self.player.vocabulary());

        loop {
            let line = match self.console.read_line(PROMPT)? {
                ReadEvent::Line(line) => line,
                ReadEvent::Interrupted => continue,
                ReadEvent::Eof => break,
            };

            // Skip empty lines
            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            self.console.add_history(input);

            match self.player.execute_user_command(input) {
                Ok(Outcome::Message(text)) => self.console.write_line(&text),
                Ok(Outcome::Won) => {
                    self.console.write_line(WINNING_MESSAGE);
                    break;
                }
                Ok(Outcome::Quit) => break,
                Err(e @ Error::Internal(_)) => return Err(e),
                Err(e) => self.console.write_line(&format!("Error: {e}")),
            }
        }

        Ok(())
    }
}
