//! Turn loop for a single game

use super::{GameError, Player, Role, TurnContext};
use crate::core::{Code, Score};
use colored::Colorize;
use log::{debug, info};
use std::io::Write;

/// Settings for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: u32,
}

impl GameConfig {
    /// Guess budget of a standard game
    pub const DEFAULT_MAX_GUESSES: u32 = 12;
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: Self::DEFAULT_MAX_GUESSES,
        }
    }
}

/// Result of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub secret: Code,
    pub winner: Role,
    pub history: Vec<(Code, Score)>,
}

impl GameOutcome {
    /// Number of guesses the code-breaker used
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }
}

/// A game between a code-maker and a code-breaker
pub struct Game<'a, W: Write> {
    code_maker: &'a mut dyn Player,
    code_breaker: &'a mut dyn Player,
    output: W,
    config: GameConfig,
}

impl<'a, W: Write> Game<'a, W> {
    /// Set up a game that reports to `output`
    pub fn new(
        code_maker: &'a mut dyn Player,
        code_breaker: &'a mut dyn Player,
        output: W,
        config: GameConfig,
    ) -> Self {
        Self {
            code_maker,
            code_breaker,
            output,
            config,
        }
    }

    /// Play the game to completion
    ///
    /// The code-maker picks a secret, then the code-breaker guesses until it
    /// matches the secret or runs out of guesses. Either ending is a normal
    /// outcome.
    ///
    /// # Errors
    /// Returns `GameError` if a player fails, a guess is not a valid code, or
    /// the output cannot be written.
    pub fn play(mut self) -> Result<GameOutcome, GameError> {
        let secret = self.code_maker.pick_code()?;
        debug!("secret picked by {}", self.code_maker.name());

        self.show_intro()?;

        let mut remaining_guesses = self.config.max_guesses;
        let mut result: Option<Score> = None;
        let mut history = Vec::new();

        while !result.is_some_and(Score::is_exact_match) && remaining_guesses > 0 {
            writeln!(
                self.output,
                "You have {remaining_guesses} guess(es) remaining."
            )?;

            let turn = TurnContext {
                remaining_guesses,
                last_score: result,
            };
            let digits = self.code_breaker.guess_code(&turn)?;
            let score = secret.score(&digits)?;
            let guess = Code::new(&digits)?;

            info!("guess {guess} scored {score}");
            history.push((guess, score));
            result = Some(score);
            remaining_guesses -= 1;

            self.show_guess_feedback(&guess, score)?;
        }

        let winner = if result.is_some_and(Score::is_exact_match) {
            Role::CodeBreaker
        } else {
            Role::CodeMaker
        };
        self.show_end(&secret, winner)?;

        Ok(GameOutcome {
            secret,
            winner,
            history,
        })
    }

    fn show_intro(&mut self) -> Result<(), GameError> {
        writeln!(self.output, "{}\n", "Mastermind".bright_cyan().bold())?;
        writeln!(
            self.output,
            "The code-maker has created a code for you to crack."
        )?;
        writeln!(self.output, "There are 4 positions in the code.")?;
        writeln!(
            self.output,
            "Each position contains a digit between 1 and 6 inclusive.\n"
        )?;
        Ok(())
    }

    fn show_guess_feedback(&mut self, guess: &Code, score: Score) -> Result<(), GameError> {
        writeln!(
            self.output,
            "\n{} guesses: {}",
            self.code_breaker.name(),
            guess.to_string().bold()
        )?;
        writeln!(self.output, "The guess contains:")?;
        writeln!(
            self.output,
            "{} correct digit(s).",
            score.exact_matches()
        )?;
        writeln!(
            self.output,
            "{} digit(s) in the incorrect position.\n",
            score.partial_matches()
        )?;
        Ok(())
    }

    fn show_end(&mut self, secret: &Code, winner: Role) -> Result<(), GameError> {
        match winner {
            Role::CodeBreaker => {
                writeln!(self.output, "{}", "Code broken!".green().bold())?;
                writeln!(self.output, "The code-breaker wins!")?;
            }
            Role::CodeMaker => {
                writeln!(self.output, "{}", "Game over!".red().bold())?;
                writeln!(self.output, "The code was {secret}.")?;
                writeln!(self.output, "The code-maker wins!")?;
            }
        }
        Ok(())
    }
}
