//! The hidden code for one game
//!
//! A Secret is created once per game and never changes afterwards, so it can
//! be shared read-only with anything that scores guesses.

use super::{CODE_LENGTH, Code, Color, ScoringError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::str::FromStr;
use thiserror::Error;

/// Requested a position outside the code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("position {index} is out of range for a code of length {length}")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub length: usize,
}

/// The code the player is trying to break
///
/// # Examples
/// ```
/// use mastermind::core::{Color, Secret};
///
/// let secret: Secret = "royg".parse().unwrap();
/// assert_eq!(secret.symbol_at(1), Ok(Color::Orange));
/// assert!(secret.symbol_at(4).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    code: Code,
}

impl Secret {
    /// Draw a uniformly random secret from the thread-local generator
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Draw a uniformly random secret from `rng`
    ///
    /// Each position is picked independently, so repeated colors are allowed.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let colors: [Color; CODE_LENGTH] =
            std::array::from_fn(|_| Color::ALL[rng.random_range(0..Color::COUNT)]);
        Self {
            code: Code::new(colors),
        }
    }

    /// Reproducible secret for a given seed
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::random_with(&mut StdRng::seed_from_u64(seed))
    }

    /// Use a caller-chosen code
    #[inline]
    #[must_use]
    pub const fn fixed(code: Code) -> Self {
        Self { code }
    }

    #[inline]
    #[must_use]
    pub const fn code(&self) -> &Code {
        &self.code
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        CODE_LENGTH
    }

    /// Color at a 0-based position
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` when `index >= 4`.
    pub fn symbol_at(&self, index: usize) -> Result<Color, IndexOutOfRange> {
        self.code.get(index).ok_or(IndexOutOfRange {
            index,
            length: self.length(),
        })
    }
}

impl From<Code> for Secret {
    fn from(code: Code) -> Self {
        Self::fixed(code)
    }
}

impl FromStr for Secret {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Code::parse(s).map(Self::fixed)
    }
}
