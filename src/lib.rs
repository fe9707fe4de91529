//! Mastermind
//!
//! A single-player Mastermind game: break a hidden 4-color code in 10 guesses,
//! playable in a full-screen terminal UI or a plain text console.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Score, Secret, score};
//!
//! let secret: Secret = "royg".parse().unwrap();
//!
//! // Right color, right place: 1; right color, wrong place: 2
//! assert_eq!(score(&secret, "gyog").unwrap(), Score::new(1, 2));
//! ```

// Core domain types
pub mod core;

// Game rules and driving loop
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
