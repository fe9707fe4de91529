//! TUI application state and logic

use crate::core::{CODE_LENGTH, Code, Color, ScoringError};
use crate::game::{
    Attempt, Game, GameState, GameView, MAX_GUESSES, SecretSource, Statistics, run_session,
};
use crate::output::formatters::score_to_pegs;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;

/// Application state
pub struct App {
    pub slots: [Option<Color>; CODE_LENGTH],
    pub cursor: usize,
    pub attempts: Vec<Attempt>,
    pub attempts_left: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    /// Revealed once the game is over
    pub secret: Option<Code>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver(GameState),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What a key press asks the game loop to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Submit(String),
    NewGame,
    Quit,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [None; CODE_LENGTH],
            cursor: 0,
            attempts: Vec::new(),
            attempts_left: MAX_GUESSES,
            messages: vec![
                Message {
                    text: "Welcome! Break the 4-color code in 10 guesses.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "↑/↓ or letters r o y g b p pick colors, Enter guesses".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            secret: None,
        }
    }

    /// Copy the board from the game being played
    pub fn sync(&mut self, game: &Game) {
        self.attempts = game.attempts().to_vec();
        self.attempts_left = game.attempts_left();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.input_mode {
            InputMode::GameOver(_) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                KeyCode::Char('n') | KeyCode::Enter => Action::NewGame,
                _ => Action::None,
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                KeyCode::Left => {
                    self.cursor = self.cursor.saturating_sub(1);
                    Action::None
                }
                KeyCode::Right => {
                    self.cursor = (self.cursor + 1).min(CODE_LENGTH - 1);
                    Action::None
                }
                KeyCode::Up | KeyCode::Char(' ') => {
                    self.cycle_slot(Color::next, Color::Red);
                    Action::None
                }
                KeyCode::Down => {
                    self.cycle_slot(Color::prev, Color::Purple);
                    Action::None
                }
                KeyCode::Backspace | KeyCode::Delete => {
                    if self.slots[self.cursor].is_none() {
                        self.cursor = self.cursor.saturating_sub(1);
                    }
                    self.slots[self.cursor] = None;
                    Action::None
                }
                KeyCode::Enter => self.take_guess(),
                KeyCode::Char(c) => {
                    if let Some(color) = Color::from_char(c.to_ascii_lowercase()) {
                        self.slots[self.cursor] = Some(color);
                        self.cursor = (self.cursor + 1).min(CODE_LENGTH - 1);
                    }
                    Action::None
                }
                _ => Action::None,
            },
        }
    }

    fn cycle_slot(&mut self, step: fn(Color) -> Color, first: Color) {
        let slot = &mut self.slots[self.cursor];
        *slot = Some(slot.map_or(first, step));
    }

    /// Turn the slots into a guess, or complain if any is still empty
    fn take_guess(&mut self) -> Action {
        if self.slots.iter().any(Option::is_none) {
            self.add_message(
                "You must choose all 4 colors to proceed.",
                MessageStyle::Error,
            );
            return Action::None;
        }

        let guess: String = self.slots.iter().flatten().map(|c| c.to_char()).collect();
        self.clear_slots();
        Action::Submit(guess)
    }

    fn clear_slots(&mut self) {
        self.slots = [None; CODE_LENGTH];
        self.cursor = 0;
    }

    pub fn feedback(&mut self, attempt: &Attempt) {
        if attempt.score.is_perfect() {
            return;
        }
        self.add_message(
            &format!(
                "{} {}: {} right place, {} wrong place",
                attempt.guess.to_string().to_uppercase(),
                score_to_pegs(attempt.score),
                attempt.score.exact(),
                attempt.score.color_only()
            ),
            MessageStyle::Info,
        );
    }

    pub fn reject(&mut self, error: &ScoringError) {
        self.add_message(&error.to_string(), MessageStyle::Error);
    }

    pub fn finish(&mut self, game: &Game, stats: &Statistics) {
        self.sync(game);
        self.stats = stats.clone();
        self.input_mode = InputMode::GameOver(game.state());
        self.secret = Some(*game.secret().code());

        match game.state() {
            GameState::Won => {
                let celebration = match game.attempts_used() {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                    2..=4 => "🔥 MAGNIFICENT! Code broken! 🔥",
                    5..=7 => "🎉 NICE WORK! You won! 🎉",
                    _ => "😅 PHEW! Just in time! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameState::Lost => {
                self.add_message(
                    &format!(
                        "You lost! The code was {}.",
                        game.secret().code().to_string().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
            }
            GameState::AwaitingGuess => {}
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.attempts.clear();
        self.attempts_left = MAX_GUESSES;
        self.clear_slots();
        self.secret = None;
        self.input_mode = InputMode::Guessing;
        self.messages.clear();
        self.add_message("New game started! A fresh code is hidden.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Terminal-backed [`GameView`]
pub struct TuiView<B: Backend> {
    terminal: Terminal<B>,
    app: App,
}

impl<B: Backend> TuiView<B> {
    #[must_use]
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            app: App::new(),
        }
    }

    #[must_use]
    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }

    fn draw(&mut self) -> Result<()> {
        let app = &self.app;
        self.terminal.draw(|f| super::rendering::ui(f, app))?;
        Ok(())
    }

    /// Redraw and wait for the next key press that maps to an action
    fn next_action(&mut self) -> Result<Action> {
        loop {
            self.draw()?;

            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let action = self.app.handle_key(key);
                if action != Action::None {
                    return Ok(action);
                }
            }
        }
    }
}

impl<B: Backend> GameView for TuiView<B> {
    fn collect_guess(&mut self, game: &Game) -> Result<Option<String>> {
        self.app.sync(game);
        loop {
            match self.next_action()? {
                Action::Submit(guess) => return Ok(Some(guess)),
                Action::Quit => return Ok(None),
                Action::NewGame | Action::None => {}
            }
        }
    }

    fn render_feedback(&mut self, game: &Game, attempt: &Attempt) -> Result<()> {
        self.app.sync(game);
        self.app.feedback(attempt);
        Ok(())
    }

    fn render_rejection(&mut self, _game: &Game, error: &ScoringError) -> Result<()> {
        self.app.reject(error);
        Ok(())
    }

    fn render_outcome(&mut self, game: &Game, stats: &Statistics) -> Result<()> {
        self.app.finish(game, stats);
        Ok(())
    }

    fn play_again(&mut self) -> Result<bool> {
        loop {
            match self.next_action()? {
                Action::NewGame => {
                    self.app.new_game();
                    return Ok(true);
                }
                Action::Quit => return Ok(false),
                Action::Submit(_) | Action::None => {}
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(source: &mut SecretSource) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    // Run app
    let mut view = TuiView::new(terminal);
    let res = run_session(&mut view, source);
    let mut terminal = view.into_terminal();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
