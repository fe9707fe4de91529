//! Formatting utilities for terminal output

use crate::core::{Code, Color, Peg, Score};
use colored::{ColoredString, Colorize};

/// Glyph for a feedback peg
#[must_use]
pub const fn peg_glyph(peg: Peg) -> char {
    match peg {
        Peg::Black => '●',
        Peg::White => '○',
        Peg::Empty => '·',
    }
}

/// Format a score as four peg glyphs, e.g. `●○○·`
#[must_use]
pub fn score_to_pegs(score: Score) -> String {
    score.pegs().into_iter().map(peg_glyph).collect()
}

/// A color letter painted in its own color
#[must_use]
pub fn paint_color(color: Color) -> ColoredString {
    let letter = color.to_char().to_string();
    match color {
        Color::Red => letter.red(),
        Color::Orange => letter.truecolor(255, 165, 0),
        Color::Yellow => letter.yellow(),
        Color::Green => letter.green(),
        Color::Blue => letter.blue(),
        Color::Purple => letter.magenta(),
    }
    .bold()
}

/// A code with every letter painted
#[must_use]
pub fn paint_code(code: Code) -> String {
    code.colors()
        .iter()
        .map(|&color| paint_color(color).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
