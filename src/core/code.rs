//! Mastermind code representation
//!
//! A Code is an ordered sequence of four colors. It plays two roles: the hidden
//! secret and each guess the player submits.

use super::{Color, ScoringError};
use std::fmt;
use std::str::FromStr;

/// Number of pegs in every code
pub const CODE_LENGTH: usize = 4;

/// Number of distinct codes (6^4)
pub const CODE_SPACE: usize = Color::COUNT.pow(CODE_LENGTH as u32);

/// A four-color Mastermind code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code([Color; CODE_LENGTH]);

impl Code {
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    /// Parse a code from its letter form, e.g. `"royg"`
    ///
    /// Length is checked before any symbol, so `"rx"` reports a length
    /// mismatch rather than the invalid `x`.
    ///
    /// # Errors
    /// Returns `ScoringError::LengthMismatch` when `text` is not exactly four
    /// characters, or `ScoringError::InvalidSymbol` naming the first character
    /// outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color, ScoringError};
    ///
    /// let code = Code::parse("royg").unwrap();
    /// assert_eq!(code.colors()[0], Color::Red);
    ///
    /// assert!(matches!(Code::parse("rrr"), Err(ScoringError::LengthMismatch { actual: 3, .. })));
    /// assert_eq!(Code::parse("rrrx"), Err(ScoringError::InvalidSymbol('x')));
    /// ```
    pub fn parse(text: &str) -> Result<Self, ScoringError> {
        let actual = text.chars().count();
        if actual != CODE_LENGTH {
            return Err(ScoringError::LengthMismatch {
                expected: CODE_LENGTH,
                actual,
            });
        }

        let mut colors = [Color::Red; CODE_LENGTH];
        for (slot, ch) in colors.iter_mut().zip(text.chars()) {
            *slot = Color::from_char(ch).ok_or(ScoringError::InvalidSymbol(ch))?;
        }

        Ok(Self(colors))
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// Color at `position`, or `None` past the end
    #[inline]
    #[must_use]
    pub fn get(self, position: usize) -> Option<Color> {
        self.0.get(position).copied()
    }

    /// Decode the `index`-th code in base-6 order (`0` is `rrrr`)
    ///
    /// # Panics
    /// Panics in debug mode if `index >= CODE_SPACE`
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < CODE_SPACE, "code index must be < {CODE_SPACE}");

        let mut colors = [Color::Red; CODE_LENGTH];
        let mut rest = index;
        for slot in colors.iter_mut().rev() {
            *slot = Color::ALL[rest % Color::COUNT];
            rest /= Color::COUNT;
        }
        Self(colors)
    }

    /// Every possible code, from `rrrr` to `pppp`
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CODE_SPACE).map(Self::from_index)
    }
}

impl From<[Color; CODE_LENGTH]> for Code {
    fn from(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }
}

impl FromStr for Code {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
