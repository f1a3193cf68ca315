//! TUI rendering with ratatui
//!
//! Menu, game board with keyboard, and game-over summary.

use super::app::{App, Message, MessageStyle, Screen};
use crate::core::{KeyboardStatus, LetterStatus};
use crate::game::MAX_GUESSES;
use crate::output::formatters::{KEYBOARD_ROWS, remaining_phrase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.screen {
        Screen::Menu => render_menu(f, app, chunks[1]),
        Screen::Playing | Screen::GameOver => {
            let main_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(55), // Board and keyboard
                    Constraint::Percentage(45), // Info panel
                ])
                .split(chunks[1]);

            render_game_panel(f, app, main_chunks[0]);
            render_info_panel(f, app, main_chunks[1]);
        }
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 EXPANDED WORDLE 🟨")
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

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut content = vec![
        Line::from(""),
        Line::from("Guess the hidden word in six tries."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("4", key),
            Span::raw(", "),
            Span::styled("5", key),
            Span::raw(" or "),
            Span::styled("6", key),
            Span::raw(" to choose the word length"),
        ]),
        Line::from(vec![Span::styled("q", key), Span::raw(" to quit")]),
        Line::from(""),
    ];

    if app.stats.total_games > 0 {
        content.push(Line::from(format!(
            "Played {} | Won {} | Win rate {:.0}%",
            app.stats.total_games,
            app.stats.games_won,
            app.stats.win_rate()
        )));
    }
    content.extend(app.messages.iter().map(message_line));

    let menu = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(menu, area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let board_height = u16::try_from(MAX_GUESSES * 2 + 2).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_height), // Board
            Constraint::Length(5),            // Keyboard
            Constraint::Min(0),
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, &app.keyboard_shown, chunks[1]);
}

fn tile_style(status: Option<LetterStatus>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        Some(LetterStatus::Green) => base.fg(Color::Black).bg(Color::Green),
        Some(LetterStatus::Yellow) => base.fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Gray) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn tile(letter: char, status: Option<LetterStatus>) -> Span<'static> {
    Span::styled(format!(" {letter} "), tile_style(status))
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let length = app.session.length().letters();
    let record = app.session.record();
    // (row being revealed, tiles shown so far)
    let revealing = app
        .reveal
        .as_ref()
        .map(|reveal| (record.len().saturating_sub(1), reveal.shown()));

    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);
    for row in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(length * 2);
        if let Some(guess_row) = record.get(row) {
            let shown = match revealing {
                Some((index, shown)) if index == row => shown,
                _ => length,
            };
            for (i, (&letter, &status)) in guess_row
                .guess
                .letters()
                .iter()
                .zip(guess_row.feedback.statuses())
                .enumerate()
            {
                let status = (i < shown).then_some(status);
                spans.push(tile(char::from(letter), status));
                spans.push(Span::raw(" "));
            }
        } else if row == record.len() && app.screen == Screen::Playing && revealing.is_none() {
            let mut typed = app.input_buffer.chars();
            for _ in 0..length {
                let letter = typed.next().unwrap_or('_');
                spans.push(tile(letter, None));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..length {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {}-letter word ", app.session.length()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardStatus, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.bytes()
                    .map(|letter| tile(char::from(letter), keyboard.status(letter)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keys = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keys, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Remaining gauge
            Constraint::Percentage(50), // Summary or statistics
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_remaining(f, app, chunks[0]);
    if app.screen == Screen::GameOver {
        render_summary(f, app, chunks[1]);
    } else {
        render_statistics(f, app, chunks[1]);
    }
    render_messages(f, app, chunks[2]);
}

fn render_remaining(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.dictionary().len().max(1);
    #[allow(clippy::cast_possible_truncation)]
    let progress_pct = ((app.remaining_shown * 100) / total).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Possible Words ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{} of {total}", app.remaining_shown));

    f.render_widget(gauge, area);
}

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut content = vec![
        Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                session.target().text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    content.extend(
        session
            .remaining_history()
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                Line::from(format!("After guess {}: {}", i + 1, remaining_phrase(count)))
            }),
    );
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "r: Restart | m: Menu | q: Quit",
        Style::default().fg(Color::Green),
    )));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Game Over ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut content = vec![Line::from(format!(
        "Games: {} | Won: {} | Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    ))];
    for guesses in 1..=MAX_GUESSES {
        let count = stats.guess_distribution[guesses];
        let width = count * 20 / max;
        content.push(Line::from(vec![
            Span::raw(format!("{guesses}: ")),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn message_line(msg: &Message) -> Line<'static> {
    let style = match msg.style {
        MessageStyle::Info => Style::default().fg(Color::White),
        MessageStyle::Success => Style::default().fg(Color::Green),
        MessageStyle::Error => Style::default().fg(Color::Red),
    };
    Line::from(Span::styled(msg.text.clone(), style))
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| ListItem::new(message_line(msg)))
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.screen {
        Screen::Menu => "4/5/6: Start | q: Quit",
        Screen::Playing => "Type letters | Enter: Submit | Backspace: Delete | Esc: Menu",
        Screen::GameOver => "r: Restart | m: Menu | q: Quit",
    };

    let status = format!(
        "Guesses left: {} | {help_text}",
        app.session.guesses_left()
    );
    let help = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
