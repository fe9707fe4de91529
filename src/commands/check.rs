//! One-shot scoring command
//!
//! Scores a single guess against a secret given on the command line.

use crate::core::{Code, Score, ScoringError, Secret, validate};

/// Result of checking a guess
pub struct CheckResult {
    pub secret: Code,
    pub guess: Code,
    pub score: Score,
}

/// Score `guess` against `secret`, ignoring case and surrounding whitespace
///
/// # Errors
///
/// Returns the scoring error for whichever of the two codes is malformed,
/// the secret first.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, ScoringError> {
    let secret: Secret = secret.trim().to_lowercase().parse()?;
    let guess = validate(&guess.trim().to_lowercase(), &secret)?;

    Ok(CheckResult {
        secret: *secret.code(),
        guess,
        score: Score::calculate(guess, *secret.code()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_scores_guess() {
        let result = check_guess("royg", "gyob").unwrap();
        assert_eq!(result.secret.to_string(), "royg");
        assert_eq!(result.guess.to_string(), "gyob");
        assert_eq!(result.score, Score::new(0, 3));
    }

    #[test]
    fn check_trims_whitespace() {
        let result = check_guess(" rrrr ", "rrrg\n").unwrap();
        assert_eq!(result.score, Score::new(3, 0));
    }

    #[test]
    fn check_accepts_uppercase() {
        let result = check_guess("ROYG", "GyOb").unwrap();
        assert_eq!(result.secret.to_string(), "royg");
        assert_eq!(result.score, Score::new(0, 3));
    }

    #[test]
    fn check_rejects_bad_secret() {
        assert_eq!(
            check_guess("rrrz", "rrrr").err(),
            Some(ScoringError::InvalidSymbol('z'))
        );
    }

    #[test]
    fn check_rejects_bad_guess() {
        assert!(matches!(
            check_guess("rrrr", "rrr"),
            Err(ScoringError::LengthMismatch { actual: 3, .. })
        ));
    }
}
