//! Text console mode
//!
//! Line-based play: type four color letters, read back the two counts.

use crate::core::{Color, ScoringError};
use crate::game::{
    Attempt, Game, GameState, GameView, MAX_GUESSES, SecretSource, Statistics, run_session,
};
use crate::output::formatters::{paint_code, score_to_pegs};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Console frontend over any line reader and writer
pub struct TextView<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextView<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hand back the writer, e.g. to inspect captured output
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the welcome banner and rules
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn print_banner(&mut self) -> Result<()> {
        let out = &mut self.output;
        writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
        writeln!(out, "{}", "            Welcome to Mastermind!".bright_green().bold())?;
        writeln!(out, "{}\n", "═".repeat(50).bright_cyan())?;
        writeln!(
            out,
            "I've picked a secret code of 4 colors. You have {MAX_GUESSES} guesses."
        )?;
        writeln!(
            out,
            "Colors: {} (repeats allowed)",
            Color::ALL
                .iter()
                .map(|c| format!("{}={}", c.to_char(), c.name()))
                .collect::<Vec<_>>()
                .join(" ")
        )?;
        writeln!(out, "Type 'quit' to leave.")?;
        Ok(())
    }

    /// Print the session summary
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn print_goodbye(&mut self, stats: &Statistics) -> Result<()> {
        if stats.total_games > 0 {
            writeln!(
                self.output,
                "\nGames: {} | Won: {} | Win rate: {:.0}%",
                stats.total_games,
                stats.games_won,
                stats.win_rate()
            )?;
        }
        writeln!(self.output, "\n👋 Goodbye!\n")?;
        Ok(())
    }

    /// Ask whether to start the first game
    ///
    /// # Errors
    /// Returns an error if reading input or writing output fails.
    pub fn wants_to_play(&mut self) -> Result<bool> {
        self.ask_yes_no("\nWould you like to play? (yes/no): ")
    }

    /// Prompt and read one line, trimmed and lowercased; `None` at end of input
    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.read_answer(prompt)?;
        Ok(matches!(answer.as_deref(), Some("yes" | "y")))
    }
}

impl<R: BufRead, W: Write> GameView for TextView<R, W> {
    fn collect_guess(&mut self, game: &Game) -> Result<Option<String>> {
        let prompt = format!("\nEnter guess number {}: ", game.next_guess_number());
        let answer = self.read_answer(&prompt)?;

        Ok(answer.filter(|line| !matches!(line.as_str(), "quit" | "q" | "exit")))
    }

    fn render_feedback(&mut self, game: &Game, attempt: &Attempt) -> Result<()> {
        if attempt.score.is_perfect() {
            return Ok(());
        }

        let out = &mut self.output;
        writeln!(out, "Right color, right place: {}", attempt.score.exact())?;
        writeln!(out, "Right color, wrong place: {}", attempt.score.color_only())?;
        writeln!(
            out,
            "{}  {}",
            score_to_pegs(attempt.score),
            format!("({} guesses left)", game.attempts_left()).bright_black()
        )?;
        Ok(())
    }

    fn render_rejection(&mut self, _game: &Game, error: &ScoringError) -> Result<()> {
        writeln!(self.output, "{}", error.to_string().red())?;
        match error {
            ScoringError::LengthMismatch { .. } => writeln!(self.output, "Please try again.")?,
            ScoringError::InvalidSymbol(_) => writeln!(
                self.output,
                "Please try again. (remember: acceptable colors include {})",
                Color::alphabet_hint()
            )?,
        }
        Ok(())
    }

    fn render_outcome(&mut self, game: &Game, stats: &Statistics) -> Result<()> {
        let out = &mut self.output;
        match game.state() {
            GameState::Won => {
                let used = game.attempts_used();
                writeln!(out, "\n\n{}", "🎉 You won! Great job! 🎉".bright_green().bold())?;
                writeln!(
                    out,
                    "Solved in {} {}.",
                    used.to_string().bright_cyan().bold(),
                    if used == 1 { "guess" } else { "guesses" }
                )?;
            }
            GameState::Lost => {
                writeln!(out, "\n\n{}", "❌ You lost! Out of guesses.".red().bold())?;
                writeln!(out, "The code was {}.", paint_code(*game.secret().code()))?;
            }
            GameState::AwaitingGuess => return Ok(()),
        }
        writeln!(
            out,
            "Games: {} | Win rate: {:.0}%\n",
            stats.total_games,
            stats.win_rate()
        )?;
        Ok(())
    }

    fn play_again(&mut self) -> Result<bool> {
        self.ask_yes_no("Would you like to play again? (yes/no): ")
    }
}

/// Run the text console mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_text(source: &mut SecretSource) -> Result<Statistics> {
    let stdin = io::stdin();
    let mut view = TextView::new(stdin.lock(), io::stdout());
    run_console(&mut view, source)
}

/// Banner, opening question, games, summary
fn run_console<R: BufRead, W: Write>(
    view: &mut TextView<R, W>,
    source: &mut SecretSource,
) -> Result<Statistics> {
    view.print_banner()?;

    let stats = if view.wants_to_play()? {
        run_session(view, source)?
    } else {
        Statistics::default()
    };

    view.print_goodbye(&stats)?;
    Ok(stats)
}
