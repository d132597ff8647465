//! Interactive game command
//!
//! Wires human and computer players into a single game on the terminal.

use crate::game::{
    ComputerPlayer, Game, GameConfig, GameError, GameOutcome, HumanPlayer, Player, PlayerKind,
};
use crate::solver::StrategyType;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

/// Options for a single game
pub struct PlayConfig {
    pub code_maker: PlayerKind,
    pub code_breaker: PlayerKind,
    pub strategy: String,
    pub seed: Option<u64>,
    pub clear_screen: bool,
    pub game: GameConfig,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            code_maker: PlayerKind::Computer,
            code_breaker: PlayerKind::Human,
            strategy: "consistent".to_string(),
            seed: None,
            clear_screen: true,
            game: GameConfig::default(),
        }
    }
}

/// Build the random source used by computer players
///
/// A fixed seed makes the computer's secret reproducible.
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Build a player of the given kind
#[must_use]
pub fn make_player(kind: PlayerKind, config: &PlayConfig, rng: StdRng) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::stdio(config.clear_screen)),
        PlayerKind::Computer => Box::new(ComputerPlayer::new(
            StrategyType::from_name(&config.strategy),
            rng,
        )),
    }
}

/// Play one game on stdin/stdout
///
/// # Errors
///
/// Returns an error if input closes mid-game, the terminal cannot be written,
/// or the computer breaker receives inconsistent feedback.
pub fn run_play(config: &PlayConfig) -> Result<GameOutcome, GameError> {
    let mut rng = make_rng(config.seed);
    let maker_rng = StdRng::seed_from_u64(rand::Rng::random(&mut rng));

    let mut code_maker = make_player(config.code_maker, config, maker_rng);
    let mut code_breaker = make_player(config.code_breaker, config, rng);

    Game::new(
        code_maker.as_mut(),
        code_breaker.as_mut(),
        io::stdout(),
        config.game,
    )
    .play()
}
