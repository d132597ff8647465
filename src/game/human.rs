//! Interactive human player
//!
//! Prompts on a text console, re-prompting until the input is a valid code.

use super::{GameError, Player, TurnContext};
use crate::core::Code;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Cursor, Stdin, Stdout, Write};

/// Source of typed lines
///
/// Implemented for `Stdin` (which locks per call, so two human players can
/// share the terminal) and for in-memory cursors.
pub trait LineReader {
    /// Read one line into `buf`, returning the number of bytes read (0 at end of input)
    ///
    /// # Errors
    /// Returns any I/O error from the underlying source.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineReader for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(&mut self.lock(), buf)
    }
}

impl<T: AsRef<[u8]>> LineReader for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// A person at the keyboard
pub struct HumanPlayer<R: LineReader = Stdin, W: Write = Stdout> {
    name: String,
    input: R,
    output: W,
    clear_screen: bool,
}

impl HumanPlayer {
    /// Human player reading from stdin and writing to stdout
    #[must_use]
    pub fn stdio(clear_screen: bool) -> Self {
        Self::new(io::stdin(), io::stdout(), clear_screen)
    }
}

impl<R: LineReader, W: Write> HumanPlayer<R, W> {
    /// Create a human player on arbitrary input and output
    ///
    /// When `clear_screen` is set, the terminal is cleared after a secret is
    /// entered so the code-breaker cannot read it.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            name: "Human".to_string(),
            input,
            output,
            clear_screen,
        }
    }

    /// Everything written to the player so far
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Get user input with a prompt
    fn get_user_input(&mut self, prompt: &str, waiting_for: &'static str) -> Result<String, GameError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(GameError::InputClosed(waiting_for));
        }

        Ok(input.trim().to_string())
    }
}

impl<R: LineReader, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn pick_code(&mut self) -> Result<Code, GameError> {
        let code = loop {
            writeln!(
                self.output,
                "Enter your four digit code! Each digit must be between 1-6 inclusive."
            )?;
            let input = self.get_user_input("Code", "code")?;

            match Code::parse(&input) {
                Ok(code) => break code,
                Err(e) => writeln!(self.output, "Invalid code ({e})! Try again.")?,
            }
        };

        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        Ok(code)
    }

    fn guess_code(&mut self, turn: &TurnContext) -> Result<Vec<u8>, GameError> {
        loop {
            let input = self.get_user_input("Guess", "guess")?;

            match Code::digits_from_text(&input) {
                Ok(digits) if Code::validate(&digits) => return Ok(digits),
                _ => {
                    writeln!(self.output, "Invalid guess! Try again.")?;
                    writeln!(
                        self.output,
                        "This does not affect your {} guess(es).",
                        turn.remaining_guesses
                    )?;
                }
            }
        }
    }
}
