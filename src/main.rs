//! Mastermind - CLI
//!
//! Break the hidden 4-color code in a terminal UI or a text console.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{analyze_guess, check_guess, run_text},
    core::Code,
    game::SecretSource,
    interactive::run_tui,
    output::{print_analysis_result, print_check_result},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind: break a hidden 4-color code (r o y g b p) in 10 guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for reproducible secret codes
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Use this secret code for every game, e.g. 'royg'
    #[arg(long, global = true)]
    secret: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Text console mode
    Text,

    /// Score one guess against a given secret
    Check {
        /// The secret code
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Show how a guess splits all 1296 possible secrets
    Analyze {
        /// Guess to analyze
        guess: String,
    },
}

/// Build the secret source from the --secret and --seed flags
///
/// A fixed secret wins over a seed; with neither, every game is random.
fn secret_source(secret: Option<&str>, seed: Option<u64>) -> Result<SecretSource> {
    match (secret, seed) {
        (Some(text), _) => {
            let code = Code::parse(&text.trim().to_lowercase())
                .map_err(|e| anyhow!("Invalid secret: {e}"))?;
            Ok(SecretSource::Fixed(code))
        }
        (None, Some(seed)) => Ok(SecretSource::seeded(seed)),
        (None, None) => Ok(SecretSource::Random),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let mut source = secret_source(cli.secret.as_deref(), cli.seed)?;
            run_tui(&mut source)?;
            Ok(())
        }
        Commands::Text => {
            let mut source = secret_source(cli.secret.as_deref(), cli.seed)?;
            run_text(&mut source)?;
            Ok(())
        }
        Commands::Check { secret, guess } => run_check_command(&secret, &guess),
        Commands::Analyze { guess } => run_analyze_command(&guess),
    }
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let result = check_guess(secret, guess).map_err(|e| anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_analyze_command(guess: &str) -> Result<()> {
    let result = analyze_guess(guess).map_err(|e| anyhow!("Invalid guess: {e}"))?;
    print_analysis_result(&result);
    Ok(())
}
