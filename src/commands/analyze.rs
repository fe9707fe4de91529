//! Guess analysis command
//!
//! Splits every possible secret by the score a guess would receive, showing
//! how much a guess narrows the search.

use crate::core::{CODE_SPACE, Code, Score, ScoringError};
use rustc_hash::FxHashMap;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    /// Secrets per score, most frequent first
    pub partitions: Vec<(Score, usize)>,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub worst_case: usize,
    pub total_secrets: usize,
}

/// Analyze how `guess` partitions the full secret space
///
/// # Errors
///
/// Returns an error if the guess is not a valid code.
pub fn analyze_guess(guess: &str) -> Result<AnalysisResult, ScoringError> {
    let guess = Code::parse(&guess.trim().to_lowercase())?;

    let counts = group_by_score(guess);
    let total_secrets = CODE_SPACE;
    let total = total_secrets as f64;

    let entropy: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // Chance of landing in a partition times its size
    let expected_remaining = counts
        .values()
        .map(|&count| (count * count) as f64)
        .sum::<f64>()
        / total;

    let worst_case = counts.values().copied().max().unwrap_or(0);

    let mut partitions: Vec<(Score, usize)> = counts.into_iter().collect();
    partitions.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

    Ok(AnalysisResult {
        guess,
        partitions,
        entropy,
        expected_remaining,
        worst_case,
        total_secrets,
    })
}

fn group_by_score(guess: Code) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for secret in Code::all() {
        *counts.entry(Score::calculate(guess, secret)).or_insert(0) += 1;
    }

    counts
}
