//! Frontend-independent game loop
//!
//! Both frontends implement [`GameView`]; the loop here owns the rules so the
//! text console and the terminal UI behave the same.

use super::state::{Attempt, Game, GameError, GameState, MAX_GUESSES};
use crate::core::{Code, ScoringError, Secret};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Collects guesses from the player and shows them the results
pub trait GameView {
    /// Next raw guess, or `None` when the player wants to stop
    ///
    /// # Errors
    /// Returns an error if reading input fails.
    fn collect_guess(&mut self, game: &Game) -> Result<Option<String>>;

    /// Show the score of an accepted guess
    ///
    /// # Errors
    /// Returns an error if writing output fails.
    fn render_feedback(&mut self, game: &Game, attempt: &Attempt) -> Result<()>;

    /// Explain why a guess was rejected
    ///
    /// # Errors
    /// Returns an error if writing output fails.
    fn render_rejection(&mut self, game: &Game, error: &ScoringError) -> Result<()>;

    /// Announce a win or loss
    ///
    /// # Errors
    /// Returns an error if writing output fails.
    fn render_outcome(&mut self, game: &Game, stats: &Statistics) -> Result<()>;

    /// Ask whether to start another game
    ///
    /// # Errors
    /// Returns an error if reading input fails.
    fn play_again(&mut self) -> Result<bool>;
}

/// Where each new game's secret comes from
pub enum SecretSource {
    /// Fresh thread-local randomness
    Random,
    /// A seeded generator kept for the whole session
    Seeded(Box<StdRng>),
    /// The same code every game
    Fixed(Code),
}

impl SecretSource {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Box::new(StdRng::seed_from_u64(seed)))
    }

    /// Secret for the next game
    #[must_use]
    pub fn next_secret(&mut self) -> Secret {
        match self {
            Self::Random => Secret::random(),
            Self::Seeded(rng) => Secret::random_with(rng.as_mut()),
            Self::Fixed(code) => Secret::fixed(*code),
        }
    }
}

/// Results across the games of one session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `k` counts games won on guess `k`
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    /// Record a finished game; unfinished games are ignored
    pub fn record(&mut self, game: &Game) {
        match game.state() {
            GameState::Won => {
                self.total_games += 1;
                self.games_won += 1;
                self.guess_distribution[game.attempts_used()] += 1;
            }
            GameState::Lost => self.total_games += 1,
            GameState::AwaitingGuess => {}
        }
    }

    /// Percentage of games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Drive one game until it is won, lost, or abandoned
///
/// Returns the final state; `GameState::AwaitingGuess` means the player quit.
///
/// # Errors
/// Propagates I/O errors from the view.
pub fn play_game<V: GameView + ?Sized>(view: &mut V, game: &mut Game) -> Result<GameState> {
    while !game.is_over() {
        let Some(input) = view.collect_guess(game)? else {
            break;
        };

        match game.submit(&input) {
            Ok(attempt) => view.render_feedback(game, &attempt)?,
            Err(GameError::Scoring(error)) => view.render_rejection(game, &error)?,
            Err(GameError::Finished) => break,
        }
    }

    Ok(game.state())
}

/// Play games until the player declines another or quits mid-game
///
/// # Errors
/// Propagates I/O errors from the view.
pub fn run_session<V: GameView + ?Sized>(
    view: &mut V,
    source: &mut SecretSource,
) -> Result<Statistics> {
    let mut stats = Statistics::default();

    loop {
        let mut game = Game::new(source.next_secret());
        if play_game(view, &mut game)? == GameState::AwaitingGuess {
            return Ok(stats);
        }

        stats.record(&game);
        view.render_outcome(&game, &stats)?;

        if !view.play_again()? {
            return Ok(stats);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Score;
    use std::collections::VecDeque;

    /// Feeds canned input and records what would have been shown
    #[derive(Default)]
    struct ScriptedView {
        guesses: VecDeque<&'static str>,
        replays: VecDeque<bool>,
        asked: usize,
        feedback: Vec<Score>,
        rejections: Vec<ScoringError>,
        outcomes: Vec<GameState>,
    }

    impl ScriptedView {
        fn new(guesses: &[&'static str], replays: &[bool]) -> Self {
            Self {
                guesses: guesses.iter().copied().collect(),
                replays: replays.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl GameView for ScriptedView {
        fn collect_guess(&mut self, _game: &Game) -> Result<Option<String>> {
            self.asked += 1;
            Ok(self.guesses.pop_front().map(str::to_string))
        }

        fn render_feedback(&mut self, _game: &Game, attempt: &Attempt) -> Result<()> {
            self.feedback.push(attempt.score);
            Ok(())
        }

        fn render_rejection(&mut self, _game: &Game, error: &ScoringError) -> Result<()> {
            self.rejections.push(*error);
            Ok(())
        }

        fn render_outcome(&mut self, game: &Game, _stats: &Statistics) -> Result<()> {
            self.outcomes.push(game.state());
            Ok(())
        }

        fn play_again(&mut self) -> Result<bool> {
            Ok(self.replays.pop_front().unwrap_or(false))
        }
    }

    fn fixed(code: &str) -> SecretSource {
        SecretSource::Fixed(Code::parse(code).unwrap())
    }

    #[test]
    fn ten_misses_end_in_loss_without_eleventh_prompt() {
        let mut view = ScriptedView::new(&["bbbb"; 12], &[]);
        let mut game = Game::new("royg".parse().unwrap());

        let state = play_game(&mut view, &mut game).unwrap();

        assert_eq!(state, GameState::Lost);
        assert_eq!(view.asked, MAX_GUESSES);
        assert_eq!(view.feedback.len(), MAX_GUESSES);
        assert_eq!(view.guesses.len(), 2);
    }

    #[test]
    fn win_on_third_attempt_stops_processing() {
        let mut view = ScriptedView::new(&["bbbb", "gyor", "royg", "pppp"], &[]);
        let mut game = Game::new("royg".parse().unwrap());

        let state = play_game(&mut view, &mut game).unwrap();

        assert_eq!(state, GameState::Won);
        assert_eq!(game.attempts_used(), 3);
        assert_eq!(
            view.feedback,
            vec![Score::new(0, 0), Score::new(0, 4), Score::PERFECT]
        );
        assert_eq!(view.guesses, VecDeque::from(["pppp"]));
    }

    #[test]
    fn rejected_guesses_are_reported_and_free() {
        let mut view = ScriptedView::new(&["rrr", "rrrx", "royg"], &[]);
        let mut game = Game::new("royg".parse().unwrap());

        play_game(&mut view, &mut game).unwrap();

        assert_eq!(
            view.rejections,
            vec![
                ScoringError::LengthMismatch {
                    expected: 4,
                    actual: 3
                },
                ScoringError::InvalidSymbol('x'),
            ]
        );
        assert_eq!(game.attempts_used(), 1);
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn quitting_mid_game_abandons_it() {
        let mut view = ScriptedView::new(&["bbbb"], &[]);
        let stats = run_session(&mut view, &mut fixed("royg")).unwrap();

        assert_eq!(stats, Statistics::default());
        assert!(view.outcomes.is_empty());
    }

    #[test]
    fn session_plays_until_declined() {
        let mut guesses = vec!["gyor", "royg"];
        guesses.extend(["bbbb"; MAX_GUESSES]);
        let mut view = ScriptedView::new(&guesses, &[true, false]);

        let stats = run_session(&mut view, &mut fixed("royg")).unwrap();

        assert_eq!(view.outcomes, vec![GameState::Won, GameState::Lost]);
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = SecretSource::seeded(99);
        let mut b = SecretSource::seeded(99);
        for _ in 0..5 {
            assert_eq!(a.next_secret(), b.next_secret());
        }
    }

    #[test]
    fn seeded_source_starts_like_from_seed() {
        let mut source = SecretSource::seeded(7);
        assert_eq!(source.next_secret(), Secret::from_seed(7));
    }

    #[test]
    fn fixed_source_repeats_code() {
        let mut source = fixed("bgpb");
        assert_eq!(source.next_secret().code().to_string(), "bgpb");
        assert_eq!(source.next_secret().code().to_string(), "bgpb");
    }

    #[test]
    fn empty_statistics_win_rate_is_zero() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
