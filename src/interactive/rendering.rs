//! TUI rendering with ratatui
//!
//! The board, the guess slots and the message pane.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Color as PegColor, Peg};
use crate::game::{GameState, MAX_GUESSES};
use crate::output::formatters::peg_glyph;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board and side panel
            Constraint::Length(5), // Guess slots
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);

    render_status(f, app, chunks[3]);
}

const fn tui_color(color: PegColor) -> Color {
    match color {
        PegColor::Red => Color::Red,
        PegColor::Orange => Color::Rgb(255, 165, 0),
        PegColor::Yellow => Color::Yellow,
        PegColor::Green => Color::Green,
        PegColor::Blue => Color::Blue,
        PegColor::Purple => Color::Magenta,
    }
}

fn color_span(color: PegColor) -> Span<'static> {
    Span::styled("⬤ ", Style::default().fg(tui_color(color)))
}

fn peg_span(peg: Peg) -> Span<'static> {
    let style = match peg {
        Peg::Black => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Peg::White => Style::default().fg(Color::Gray),
        Peg::Empty => Style::default().fg(Color::DarkGray),
    };
    Span::styled(peg_glyph(peg).to_string(), style)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .attempts
        .iter()
        .enumerate()
        .map(|(i, attempt)| {
            let mut spans = vec![Span::styled(
                format!("{:>2}  ", i + 1),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(attempt.guess.colors().iter().map(|&c| color_span(c)));
            spans.push(Span::raw("  "));
            spans.extend(attempt.score.pegs().into_iter().map(peg_span));
            spans.push(Span::styled(
                format!(
                    "  {}/{}",
                    attempt.score.exact(),
                    attempt.score.color_only()
                ),
                Style::default().fg(Color::DarkGray),
            ));
            Line::from(spans)
        })
        .collect();

    if let Some(secret) = app.secret {
        let mut spans = vec![Span::styled(
            "Code ",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        spans.extend(secret.colors().iter().map(|&c| color_span(c)));
        lines.push(Line::from(""));
        lines.push(Line::from(spans));
    } else if lines.is_empty() {
        lines.push(Line::from("No guesses yet"));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Guesses left gauge
            Constraint::Length(6), // Legend
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_guesses_left(f, app, chunks[0]);
    render_legend(f, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_guesses_left(f: &mut Frame, app: &App, area: Rect) {
    let used = MAX_GUESSES - app.attempts_left;
    let percent = (used * 100 / MAX_GUESSES) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{MAX_GUESSES} used | {} left", app.attempts_left));

    f.render_widget(gauge, area);
}

fn render_legend(f: &mut Frame, area: Rect) {
    let colors: Vec<Span> = PegColor::ALL
        .iter()
        .flat_map(|&c| {
            [
                color_span(c),
                Span::raw(format!("{}  ", c.to_char())),
            ]
        })
        .collect();

    let content = vec![
        Line::from(colors),
        Line::from(vec![peg_span(Peg::Black), Span::raw(" right color, right place")]),
        Line::from(vec![peg_span(Peg::White), Span::raw(" right color, wrong place")]),
        Line::from(vec![peg_span(Peg::Empty), Span::raw(" no match")]),
    ];

    let legend = Paragraph::new(content).block(
        Block::default()
            .title(" Legend ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(legend, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::GameOver(GameState::Won) => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            Color::Green,
        ),
        InputMode::GameOver(_) => (
            " GAME OVER | Press 'n' for new game or 'q' to quit ",
            Color::Red,
        ),
        InputMode::Guessing => (
            " Your Guess (←/→ move, ↑/↓ cycle, r o y g b p set, Enter submit) ",
            Color::Yellow,
        ),
    };

    let content = if matches!(app.input_mode, InputMode::Guessing) {
        let spans: Vec<Span> = app
            .slots
            .iter()
            .enumerate()
            .flat_map(|(i, slot)| {
                let (glyph, style) = match slot {
                    Some(c) => ("⬤", Style::default().fg(tui_color(*c))),
                    None => ("◯", Style::default().fg(Color::DarkGray)),
                };
                let marker = if i == app.cursor { "▸" } else { " " };
                [
                    Span::styled(marker, Style::default().fg(Color::Yellow)),
                    Span::styled(glyph, style),
                    Span::raw("  "),
                ]
            })
            .collect();
        Line::from(spans)
    } else {
        Line::from("")
    };

    let input = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Guessing => "Mode: Playing",
        InputMode::GameOver(GameState::Won) => "Mode: Won",
        InputMode::GameOver(_) => "Mode: Lost",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let left_text = format!("Guesses left: {}", app.attempts_left);
    let left = Paragraph::new(left_text).alignment(Alignment::Center);
    f.render_widget(left, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "q: Quit | Enter: Guess",
        InputMode::GameOver(_) => "q: Quit | n: New Game",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
