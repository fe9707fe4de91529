//! Core domain types for Mastermind
//!
//! Colors, codes, the secret holder and the scoring rules. Nothing in here
//! performs I/O or keeps global state.

mod code;
mod color;
mod score;
mod secret;

pub use code::{CODE_LENGTH, CODE_SPACE, Code};
pub use color::Color;
pub use score::{
    Peg, Score, ScoringError, exact_match_count, is_exact, is_exact_match, score, validate,
    wrong_position_match_count,
};
pub use secret::{IndexOutOfRange, Secret};
