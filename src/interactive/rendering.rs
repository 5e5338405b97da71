//! TUI rendering with ratatui
//!
//! Gallows figure, masked word, on-screen keyboard and score panels.

use super::app::{App, FormField, InputMode, MessageStyle};
use crate::core::RoundState;
use crate::game::Store;
use crate::output::formatters::{attempts_bar, gallows_art, keyboard_rows, spaced_upper};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: Store, R: Rng>(f: &mut Frame, app: &App<S, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(21), // Gallows
            Constraint::Min(30),    // Word, keyboard, messages
        ])
        .split(chunks[1]);

    render_gallows(f, app.engine.round(), main_chunks[0]);
    render_play_area(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);

    match app.input_mode {
        InputMode::Guessing => {}
        InputMode::CategorySelect => render_category_picker(f, app),
        InputMode::AddWords => render_add_words(f, app),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 GALLOWS - Guess the word letter by letter")
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

fn render_gallows(f: &mut Frame, round: &RoundState, area: Rect) {
    let color = if round.attempts_remaining() <= 2 {
        Color::Red
    } else {
        Color::White
    };

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(
        gallows_art(round.attempts_used())
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(color)))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        attempts_bar(round.attempts_remaining()),
        Style::default().fg(Color::Red),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_play_area<S: Store, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let keys = app.engine.keyboard();
    let keyboard_height = u16::try_from(keyboard_rows(&keys).len() + 2).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),               // Word
            Constraint::Length(keyboard_height), // Keyboard
            Constraint::Min(3),                  // Messages
        ])
        .split(area);

    render_word(f, app.engine.round(), chunks[0]);
    render_keyboard(f, app.engine.round(), &keys, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, round: &RoundState, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced_upper(&round.render_word()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Word ({}) ", round.category()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, round: &RoundState, keys: &[char], area: Rect) {
    let lines: Vec<Line> = keyboard_rows(keys)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&key| {
                    let style = if !round.has_guessed(key) {
                        Style::default().fg(Color::White)
                    } else if round.contains(key) {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT)
                    };
                    Span::styled(format!(" {} ", key.to_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<S: Store, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: Store, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    let score = Paragraph::new(format!("Score: {}", app.engine.current_score()))
        .alignment(Alignment::Center);
    f.render_widget(score, chunks[0]);

    let high = Paragraph::new(format!("High score: {}", app.engine.high_score()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(high, chunks[1]);

    let stats = app.engine.statistics();
    let stats_text = format!(
        "Won {} | Lost {} | {} categories",
        stats.rounds_won,
        stats.rounds_lost,
        app.engine.bank().category_count()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if app.engine.round().is_finished() {
        "Enter: Next round | Esc: Quit"
    } else {
        "Tab: Category | ^N: New | ^R: Random | ^A: Add words | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn render_category_picker<S: Store, R: Rng>(f: &mut Frame, app: &App<S, R>) {
    let area = centered_rect(40, 50, f.area());

    let items: Vec<ListItem> = app
        .engine
        .categories()
        .map(|category| {
            let count = app.engine.bank().words(category).map_or(0, <[String]>::len);
            ListItem::new(format!("{category} ({count})"))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Choose category | Enter: select | Esc: back ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.category_cursor));
    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_add_words<S: Store, R: Rng>(f: &mut Frame, app: &App<S, R>) {
    let area = centered_rect(60, 40, f.area());

    let field_style = |field: FormField| {
        if app.form.focus == field {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };

    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(" Category: "),
            Span::styled(app.form.category.as_str(), field_style(FormField::Category)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw(" Words (comma separated): "),
            Span::styled(app.form.words.as_str(), field_style(FormField::Words)),
        ]),
    ];

    let form = Paragraph::new(content).block(
        Block::default()
            .title(" Add words | Tab: switch field | Enter: save | Esc: cancel ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, area);
    f.render_widget(form, area);
}

/// A rectangle centred in `area` taking the given share of its size
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
