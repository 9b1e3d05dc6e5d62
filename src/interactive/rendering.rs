//! TUI rendering with ratatui

use super::app::{App, NoticeStyle};
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{GameState, MAX_GUESSES};
use crate::output::formatters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                     // Header
            Constraint::Min(MAX_GUESSES as u16 + 4),   // Main content
            Constraint::Length(5),                     // Keyboard
            Constraint::Length(3),                     // Notice bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - clues on the left, the guess grid on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_clues(f, app, main_chunks[0]);
    render_grid(f, app, main_chunks[1]);

    render_keyboard(f, app, chunks[2]);
    render_notice(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let date = app.session.puzzle().date.format("%B %-d, %Y");
    let timer = formatters::elapsed(app.elapsed_secs());
    let header = Paragraph::new(format!("PHYSICLE · {date} · {timer}"))
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

fn render_clues(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "One equation per letter, in order:",
        Style::default().fg(Color::DarkGray),
    ))];

    for (i, clue) in app.session.puzzle().clues.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(
                clue.entry.expression.clone(),
                Style::default().fg(Color::Cyan),
            ),
        ]));
    }

    // Reveal the stories behind the equations once the board is locked
    if app.session.state().is_over() {
        lines.push(Line::from(""));
        for clue in &app.session.puzzle().clues {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", clue.entry.full_equation),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("— {}", clue.entry.explanation),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Clues ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let attempts = app.session.attempts();
    let pending = app.session.pending();
    let playing = app.session.state() == GameState::InProgress;

    let mut lines = Vec::with_capacity(MAX_GUESSES);
    for row in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for col in 0..WORD_LENGTH {
            let span = if let Some(attempt) = attempts.get(row) {
                let letter = attempt.word.letter_at(col) as char;
                Span::styled(format!(" {letter} "), status_style(attempt.feedback.status_at(col)))
            } else if playing && row == attempts.len() {
                match pending.get(col) {
                    Some(&letter) => Span::styled(
                        format!(" {} ", letter as char),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                }
            } else {
                Span::styled(" · ", Style::default().fg(Color::DarkGray))
            };
            spans.push(span);
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Guesses ({}/{MAX_GUESSES}) ", attempts.len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| match keyboard.status(letter as u8) {
                    Some(status) => Span::styled(format!(" {letter} "), status_style(status)),
                    None => Span::raw(format!(" {letter} ")),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.notice {
        Some(notice) => {
            let color = match notice.style {
                NoticeStyle::Info => Color::DarkGray,
                NoticeStyle::Success => Color::Green,
                NoticeStyle::Error => Color::Red,
            };
            (notice.text.clone(), Style::default().fg(color))
        }
        None => (
            "Enter submits · Backspace deletes · Esc quits".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}
