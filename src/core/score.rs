//! Guess scoring
//!
//! Scoring a guess against the secret yields two counts:
//! - `exact`: positions where guess and secret hold the same color
//! - `color_only`: further color matches once the exact positions are set
//!   aside, pairing each remaining guess peg with at most one remaining
//!   secret peg of the same color
//!
//! Every entry point taking raw guess text validates it first. Validation
//! checks the length before the symbols and stops at the first problem.

use super::{CODE_LENGTH, Code, Color, Secret};
use thiserror::Error;

/// Why a guess could not be scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Guess is length {actual}; should be length {expected}.")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Color '{0}' is not valid.")]
    InvalidSymbol(char),
}

/// Feedback for one guess
///
/// Always satisfies `exact + color_only <= 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score {
    exact: u8,
    color_only: u8,
}

/// One feedback marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Peg {
    /// Right color, right place
    Black,
    /// Right color, wrong place
    White,
    Empty,
}

impl Score {
    /// Every position matches
    pub const PERFECT: Self = Self {
        exact: CODE_LENGTH as u8,
        color_only: 0,
    };

    /// # Panics
    /// Panics if `exact + color_only > 4`, in release builds too
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, color_only: u8) -> Self {
        assert!(
            exact as usize + color_only as usize <= CODE_LENGTH,
            "score cannot exceed code length"
        );
        Self { exact, color_only }
    }

    /// Score an already validated guess against a secret code
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    ///
    /// let secret = Code::parse("royg").unwrap();
    /// let guess = Code::parse("gyob").unwrap();
    /// assert_eq!(Score::calculate(guess, secret), Score::new(0, 3));
    /// ```
    #[must_use]
    pub fn calculate(guess: Code, secret: Code) -> Self {
        Self {
            exact: exact_matches(guess, secret),
            color_only: residual_matches(guess, secret),
        }
    }

    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    #[inline]
    #[must_use]
    pub const fn color_only(self) -> u8 {
        self.color_only
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Feedback pegs: black first, then white, then empty
    #[must_use]
    pub fn pegs(self) -> [Peg; CODE_LENGTH] {
        let black = usize::from(self.exact);
        let white = usize::from(self.color_only);
        std::array::from_fn(|i| {
            if i < black {
                Peg::Black
            } else if i < black + white {
                Peg::White
            } else {
                Peg::Empty
            }
        })
    }
}

fn exact_matches(guess: Code, secret: Code) -> u8 {
    guess
        .colors()
        .iter()
        .zip(secret.colors())
        .filter(|(g, s)| g == s)
        .count() as u8
}

/// Size of the best one-to-one pairing between the non-exact pegs
///
/// Pegs of the same color are interchangeable, so the pairing size is the
/// per-color minimum of the two leftover counts, summed.
fn residual_matches(guess: Code, secret: Code) -> u8 {
    let mut guess_left = [0u8; Color::COUNT];
    let mut secret_left = [0u8; Color::COUNT];

    for (&g, &s) in guess.colors().iter().zip(secret.colors()) {
        if g != s {
            guess_left[g.index()] += 1;
            secret_left[s.index()] += 1;
        }
    }

    guess_left
        .iter()
        .zip(&secret_left)
        .map(|(&g, &s)| g.min(s))
        .sum()
}

/// Check a raw guess against the secret's length and the alphabet
///
/// # Errors
/// `LengthMismatch` when the character count differs from the secret's,
/// otherwise `InvalidSymbol` for the first character outside the alphabet.
pub fn validate(guess: &str, secret: &Secret) -> Result<Code, ScoringError> {
    let actual = guess.chars().count();
    if actual != secret.length() {
        return Err(ScoringError::LengthMismatch {
            expected: secret.length(),
            actual,
        });
    }
    Code::parse(guess)
}

/// Number of positions where guess and secret agree
///
/// # Errors
/// Fails exactly as [`validate`] does.
pub fn exact_match_count(guess: &str, secret: &Secret) -> Result<u8, ScoringError> {
    let guess = validate(guess, secret)?;
    Ok(exact_matches(guess, *secret.code()))
}

/// Whether every position matches
///
/// # Errors
/// Fails exactly as [`validate`] does.
pub fn is_exact_match(guess: &str, secret: &Secret) -> Result<bool, ScoringError> {
    let guess = validate(guess, secret)?;
    Ok(guess == *secret.code())
}

/// Number of right colors in the wrong place
///
/// # Errors
/// Fails exactly as [`validate`] does.
pub fn wrong_position_match_count(guess: &str, secret: &Secret) -> Result<u8, ScoringError> {
    let guess = validate(guess, secret)?;
    Ok(residual_matches(guess, *secret.code()))
}

/// Score a raw guess against the secret
///
/// # Errors
/// Fails exactly as [`validate`] does.
///
/// # Examples
/// ```
/// use mastermind::core::{Score, ScoringError, Secret, score};
///
/// let secret: Secret = "rrrr".parse().unwrap();
/// assert_eq!(score(&secret, "rrrg"), Ok(Score::new(3, 0)));
/// assert_eq!(score(&secret, "rrrx"), Err(ScoringError::InvalidSymbol('x')));
/// ```
pub fn score(secret: &Secret, guess: &str) -> Result<Score, ScoringError> {
    let guess = validate(guess, secret)?;
    Ok(Score::calculate(guess, *secret.code()))
}

/// Whether a raw guess breaks the code
///
/// # Errors
/// Fails exactly as [`validate`] does.
pub fn is_exact(secret: &Secret, guess: &str) -> Result<bool, ScoringError> {
    is_exact_match(guess, secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(text: &str) -> Secret {
        text.parse().unwrap()
    }

    /// Greedy first-occurrence removal over the leftover pegs
    fn greedy_residual(guess: Code, secret: Code) -> u8 {
        let mut guess_left = Vec::new();
        let mut secret_left = Vec::new();
        for (&g, &s) in guess.colors().iter().zip(secret.colors()) {
            if g != s {
                guess_left.push(g);
                secret_left.push(s);
            }
        }

        let mut count = 0;
        for g in guess_left {
            if let Some(pos) = secret_left.iter().position(|&s| s == g) {
                secret_left.remove(pos);
                count += 1;
            }
        }
        count
    }

    #[test]
    fn perfect_constant() {
        assert!(Score::PERFECT.is_perfect());
        assert_eq!(Score::PERFECT.exact(), 4);
        assert_eq!(Score::PERFECT.color_only(), 0);
        assert_eq!(Score::PERFECT.pegs(), [Peg::Black; 4]);
    }

    #[test]
    fn all_red_secret_scenarios() {
        let s = secret("rrrr");
        assert_eq!(score(&s, "rrrr"), Ok(Score::new(4, 0)));
        assert_eq!(is_exact(&s, "rrrr"), Ok(true));
        assert_eq!(score(&s, "oooo"), Ok(Score::new(0, 0)));
        assert_eq!(score(&s, "rrrg"), Ok(Score::new(3, 0)));
        assert_eq!(score(&s, "grrr"), Ok(Score::new(3, 0)));

        for guess in ["oooo", "rrrg", "grrr"] {
            assert_eq!(is_exact(&s, guess), Ok(false), "{guess}");
        }
    }

    #[test]
    fn exact_match_count_scenarios() {
        let s = secret("rrrr");
        assert_eq!(exact_match_count("rrrr", &s), Ok(4));
        assert_eq!(exact_match_count("oooo", &s), Ok(0));
        assert_eq!(exact_match_count("roro", &s), Ok(2));
        assert_eq!(exact_match_count("robo", &s), Ok(1));
        assert_eq!(exact_match_count("rgrr", &s), Ok(3));
        assert_eq!(exact_match_count("pbrg", &s), Ok(1));
        assert_eq!(exact_match_count("brrb", &s), Ok(2));
    }

    #[test]
    fn wrong_position_scenarios() {
        let s = secret("royg");
        assert_eq!(wrong_position_match_count("gyor", &s), Ok(4));
        assert_eq!(wrong_position_match_count("gyog", &s), Ok(2));
        assert_eq!(wrong_position_match_count("gyob", &s), Ok(3));
        assert_eq!(wrong_position_match_count("gooo", &s), Ok(1));
        assert_eq!(wrong_position_match_count("oooo", &s), Ok(0));
        assert_eq!(wrong_position_match_count("bbbb", &s), Ok(0));
    }

    #[test]
    fn exact_positions_are_not_counted_twice() {
        // The green in position 3 is exact, so the leading green has nothing left to pair with
        let s = secret("royg");
        assert_eq!(score(&s, "gyog"), Ok(Score::new(1, 2)));
    }

    #[test]
    fn length_mismatch_reported() {
        let s = secret("rrrr");
        assert_eq!(
            score(&s, "rrr"),
            Err(ScoringError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert!(matches!(
            is_exact(&s, "rrrrr"),
            Err(ScoringError::LengthMismatch { actual: 5, .. })
        ));
    }

    #[test]
    fn invalid_symbol_reported() {
        let s = secret("rrrr");
        assert_eq!(score(&s, "rrrx"), Err(ScoringError::InvalidSymbol('x')));
        assert_eq!(is_exact(&s, "xxxx"), Err(ScoringError::InvalidSymbol('x')));
        assert_eq!(
            exact_match_count("xxxx", &s),
            Err(ScoringError::InvalidSymbol('x'))
        );
        assert_eq!(
            wrong_position_match_count("xxxx", &s),
            Err(ScoringError::InvalidSymbol('x'))
        );
    }

    #[test]
    fn uppercase_is_not_in_the_alphabet() {
        let s = secret("rrrr");
        assert_eq!(score(&s, "RRRR"), Err(ScoringError::InvalidSymbol('R')));
        assert_eq!(is_exact(&s, "rrRr"), Err(ScoringError::InvalidSymbol('R')));
        assert_eq!(
            validate("Royg", &s),
            Err(ScoringError::InvalidSymbol('R'))
        );
    }

    #[test]
    fn length_checked_before_symbols() {
        let s = secret("rrrr");
        for result in [
            exact_match_count("xxxxx", &s).map(|_| ()),
            wrong_position_match_count("xxxxx", &s).map(|_| ()),
            is_exact_match("xxxxx", &s).map(|_| ()),
            score(&s, "xxxxx").map(|_| ()),
        ] {
            assert!(matches!(
                result,
                Err(ScoringError::LengthMismatch { actual: 5, .. })
            ));
        }
    }

    #[test]
    fn error_messages() {
        let length = ScoringError::LengthMismatch {
            expected: 4,
            actual: 5,
        };
        assert_eq!(length.to_string(), "Guess is length 5; should be length 4.");
        assert_eq!(
            ScoringError::InvalidSymbol('x').to_string(),
            "Color 'x' is not valid."
        );
    }

    #[test]
    fn pegs_follow_score() {
        use Peg::{Black, Empty, White};
        assert_eq!(Score::new(0, 0).pegs(), [Empty; 4]);
        assert_eq!(Score::new(1, 2).pegs(), [Black, White, White, Empty]);
        assert_eq!(Score::new(0, 4).pegs(), [White; 4]);
        assert_eq!(Score::new(2, 2).pegs(), [Black, Black, White, White]);
    }

    #[test]
    #[should_panic(expected = "score cannot exceed code length")]
    fn new_rejects_impossible_score() {
        let _ = Score::new(3, 3);
    }

    #[test]
    fn scoring_is_idempotent() {
        let s = secret("bgpb");
        let first = score(&s, "gbbp");
        assert_eq!(first, score(&s, "gbbp"));
        assert_eq!(s, secret("bgpb"));
    }

    #[test]
    fn exhaustive_score_bounds() {
        for secret in Code::all() {
            for guess in Code::all() {
                let score = Score::calculate(guess, secret);
                assert!(
                    usize::from(score.exact() + score.color_only()) <= CODE_LENGTH,
                    "{guess} vs {secret}: {score:?}"
                );
                assert_eq!(score.is_perfect(), guess == secret);
                if score.is_perfect() {
                    assert_eq!(score.color_only(), 0);
                }
            }
        }
    }

    #[test]
    fn exhaustive_wrong_position_symmetry() {
        for secret in Code::all() {
            for guess in Code::all() {
                assert_eq!(
                    residual_matches(guess, secret),
                    residual_matches(secret, guess),
                    "{guess} vs {secret}"
                );
            }
        }
    }

    #[test]
    fn exhaustive_agrees_with_greedy_pairing() {
        for secret in Code::all() {
            for guess in Code::all() {
                assert_eq!(
                    residual_matches(guess, secret),
                    greedy_residual(guess, secret),
                    "{guess} vs {secret}"
                );
            }
        }
    }

    #[test]
    fn text_entry_points_agree_with_calculate() {
        let s = secret("pyyb");
        for guess in Code::all() {
            let text = guess.to_string();
            let expected = Score::calculate(guess, *s.code());
            assert_eq!(score(&s, &text), Ok(expected));
            assert_eq!(exact_match_count(&text, &s), Ok(expected.exact()));
            assert_eq!(
                wrong_position_match_count(&text, &s),
                Ok(expected.color_only())
            );
            assert_eq!(is_exact(&s, &text), Ok(expected.is_perfect()));
        }
    }
}
