//! TUI rendering with ratatui
//!
//! Gallows, board and session gauges for one game.

use super::app::{App, MessageStyle};
use crate::game::SessionState;
use crate::output::formatters::{format_elapsed, format_letters, gallows_stage, render_revealed};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Prompt
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, now, main_chunks[1]);

    render_prompt(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 HANGMAN - Guess the word one letter at a time")
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
    let session = &app.session;
    let used = session.max_attempts() - session.attempts_remaining();

    let mut lines: Vec<Line> = gallows_stage(used, session.max_attempts())
        .lines()
        .map(|row| Line::styled(row.to_string(), Style::default().fg(Color::Gray)))
        .collect();
    lines.push(Line::from(""));

    // Show the full word once the game is lost
    let word = if app.is_over() && !session.state().is_win() {
        render_revealed(
            &session
                .target()
                .text()
                .chars()
                .map(Some)
                .collect::<Vec<_>>(),
        )
    } else {
        render_revealed(&session.revealed())
    };
    let word_color = match session.state() {
        SessionState::Active => Color::White,
        SessionState::Won => Color::Green,
        SessionState::LostByAttempts | SessionState::LostByTimeout => Color::Red,
    };
    lines.push(Line::from(vec![
        Span::raw("Word: "),
        Span::styled(
            word,
            Style::default().fg(word_color).add_modifier(Modifier::BOLD),
        ),
    ]));

    let board = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let timed = app.session.time_limit().is_some();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                         // Attempts
            Constraint::Length(if timed { 3 } else { 0 }), // Clock
            Constraint::Length(4),                         // Letters
            Constraint::Min(3),                            // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    if timed {
        render_clock(f, app, now, chunks[1]);
    }
    render_letters(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.session.attempts_remaining();
    let max = app.session.max_attempts().max(1);
    let pct = (u64::from(remaining) * 100 / u64::from(max)) as u16;
    let color = if pct > 50 {
        Color::Green
    } else if pct > 20 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(pct)
        .label(format!("{remaining}/{max} left"));
    f.render_widget(gauge, area);
}

fn render_clock(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let (Some(limit), Some(left)) = (app.session.time_limit(), app.session.remaining_time(now))
    else {
        return;
    };
    let ratio = if limit.is_zero() {
        0.0
    } else {
        (left.as_secs_f64() / limit.as_secs_f64()).clamp(0.0, 1.0)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(ratio)
        .label(format!("{}s", left.as_secs()));
    f.render_widget(gauge, area);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let tried = format_letters(app.session.guessed_letters());
    let content = vec![
        Line::from(vec![
            Span::raw("Tried: "),
            Span::styled(
                if tried.is_empty() { "-".to_string() } else { tried },
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(format!("Hints left: {}", app.session.hints_remaining())),
    ];

    let paragraph = Paragraph::new(content)
        .block(Block::default().title(" Letters ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
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

fn render_prompt(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.session.state() {
        SessionState::Active => (" Type a letter to guess | TAB: hint ", Color::Yellow),
        SessionState::Won => (" 🎉 SOLVED! | Enter: new game | q: quit ", Color::Green),
        SessionState::LostByAttempts | SessionState::LostByTimeout => {
            (" GAME OVER | Enter: new game | q: quit ", Color::Red)
        }
    };

    let prompt = Paragraph::new(app.session.state().to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(prompt, area);
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

    let mode = Paragraph::new(format!("Mode: {}", app.mode)).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games, app.stats.win_rate
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let best = app
        .stats
        .best_time
        .map_or_else(|| "-".to_string(), format_elapsed);
    let best = Paragraph::new(format!("Best: {best}")).alignment(Alignment::Center);
    f.render_widget(best, chunks[2]);

    let help = Paragraph::new("Esc: Quit | TAB: Hint")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
