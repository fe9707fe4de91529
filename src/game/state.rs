//! Per-game state machine
//!
//! A game starts awaiting guesses. A malformed guess is rejected without
//! touching the tally. A valid guess is recorded and either wins the game or,
//! once the tenth valid guess misses, loses it.

use crate::core::{Code, Score, ScoringError, Secret, validate};
use thiserror::Error;

/// Valid guesses allowed per game
pub const MAX_GUESSES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    Won,
    Lost,
}

/// A scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Code,
    pub score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error("The game is already over.")]
    Finished,
}

/// One round of Mastermind against a fixed secret
#[derive(Debug, Clone)]
pub struct Game {
    secret: Secret,
    attempts: Vec<Attempt>,
    state: GameState,
}

impl Game {
    #[must_use]
    pub fn new(secret: Secret) -> Self {
        Self {
            secret,
            attempts: Vec::with_capacity(MAX_GUESSES),
            state: GameState::AwaitingGuess,
        }
    }

    /// Score `guess` and advance the game
    ///
    /// # Errors
    /// Returns `GameError::Finished` once the game is won or lost, and
    /// `GameError::Scoring` for a malformed guess. Neither consumes an attempt.
    pub fn submit(&mut self, guess: &str) -> Result<Attempt, GameError> {
        if self.is_over() {
            return Err(GameError::Finished);
        }

        let guess = validate(guess, &self.secret)?;
        let attempt = Attempt {
            guess,
            score: Score::calculate(guess, *self.secret.code()),
        };
        self.attempts.push(attempt);

        if attempt.score.is_perfect() {
            self.state = GameState::Won;
        } else if self.attempts.len() >= MAX_GUESSES {
            self.state = GameState::Lost;
        }

        Ok(attempt)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::AwaitingGuess
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Valid guesses made so far, including a winning one
    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.attempts.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_GUESSES - self.attempts.len()
    }

    /// 1-based number of the guess being asked for
    #[inline]
    #[must_use]
    pub fn next_guess_number(&self) -> usize {
        self.attempts.len() + 1
    }

    /// The secret, for revealing once the game is over
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }
}
