//! Game rules and the shared driving loop

mod session;
mod state;

pub use session::{GameView, SecretSource, Statistics, play_game, run_session};
pub use state::{Attempt, Game, GameError, GameState, MAX_GUESSES};
