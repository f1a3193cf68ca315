//! TUI application state and logic

use super::reveal::Reveal;
use crate::core::{KeyboardStatus, WordLength};
use crate::game::{GuessOutcome, MAX_GUESSES, Session};
use crate::wordlists::{WordListError, WordSource, load_with_fallback};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for a key before advancing animations
const TICK_RATE: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub session: Session,
    pub source: WordSource,
    pub screen: Screen,
    pub input_buffer: String,
    pub reveal: Option<Reveal>,
    /// Keyboard as of the last fully revealed guess
    pub keyboard_shown: KeyboardStatus,
    /// Candidate count as of the last fully revealed guess
    pub remaining_shown: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    GameOver,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses, index 1..=6
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    pub fn record(&mut self, outcome: &GuessOutcome) {
        self.total_games += 1;
        if outcome.is_win {
            self.games_won += 1;
            self.guess_distribution[outcome.guess_number] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let rate = self.games_won as f64 / self.total_games as f64 * 100.0;
        rate
    }
}

impl App {
    #[must_use]
    pub fn new(session: Session, source: WordSource) -> Self {
        let remaining_shown = session.remaining();
        Self {
            session,
            source,
            screen: Screen::Menu,
            input_buffer: String::new(),
            reveal: None,
            keyboard_shown: KeyboardStatus::new(),
            remaining_shown,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// True while a guess is being revealed; input is ignored meanwhile
    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Start a game of `length` letters, loading its list if the length changed
    ///
    /// An unusable word list falls back to the built-in one. The fallback is
    /// reported in the message panel, since stderr is hidden behind the TUI.
    pub fn start_game(&mut self, length: WordLength) {
        let mut fallback = None;
        if length == self.session.length() {
            self.session.restart();
        } else {
            match load_with_fallback(&self.source, length) {
                Ok((dictionary, cause)) => {
                    fallback = cause;
                    self.session.change_dictionary(dictionary);
                }
                Err(err) => {
                    self.add_message(&err.to_string(), MessageStyle::Error);
                    return;
                }
            }
        }

        self.screen = Screen::Playing;
        self.input_buffer.clear();
        self.reveal = None;
        self.keyboard_shown = self.session.keyboard();
        self.remaining_shown = self.session.remaining();
        self.messages.clear();
        if let Some(err) = fallback {
            self.report_fallback(&err);
        }
        self.add_message(
            &format!(
                "Guess the {length}-letter word in {MAX_GUESSES} tries ({} words)",
                self.session.dictionary().len()
            ),
            MessageStyle::Info,
        );
    }

    /// Tell the player a word list was replaced by the built-in one
    pub fn report_fallback(&mut self, err: &WordListError) {
        self.add_message(
            &format!("{err}; using the built-in list"),
            MessageStyle::Error,
        );
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if self.is_revealing() {
            return;
        }

        match self.screen {
            Screen::Menu => match key.code {
                KeyCode::Char('4') => self.start_game(WordLength::Four),
                KeyCode::Char('5') => self.start_game(WordLength::Five),
                KeyCode::Char('6') => self.start_game(WordLength::Six),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::Playing => match key.code {
                KeyCode::Esc => self.screen = Screen::Menu,
                KeyCode::Enter => self.submit(now),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < self.session.length().letters() {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                _ => {}
            },
            Screen::GameOver => match key.code {
                KeyCode::Char('r' | 'R') => self.start_game(self.session.length()),
                KeyCode::Char('m' | 'M') => self.screen = Screen::Menu,
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
        }
    }

    /// Submit the typed guess and start revealing it
    pub fn submit(&mut self, now: Instant) {
        match self.session.submit_guess(&self.input_buffer) {
            Ok(outcome) => {
                self.input_buffer.clear();
                self.reveal = Some(Reveal::new(outcome, now));
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Advance the reveal animation
    pub fn tick(&mut self, now: Instant) {
        let done = self.reveal.as_mut().is_some_and(|reveal| reveal.tick(now));
        if !done {
            return;
        }
        if let Some(reveal) = self.reveal.take() {
            self.finish_reveal(&reveal.into_outcome());
        }
    }

    fn finish_reveal(&mut self, outcome: &GuessOutcome) {
        self.keyboard_shown = outcome.keyboard;
        self.remaining_shown = outcome.remaining;

        if outcome.is_win {
            self.stats.record(outcome);
            let celebration = match outcome.guess_number {
                1 => "🎯 Hole in one!",
                2 => "🔥 Magnificent!",
                3 => "✨ Splendid!",
                4 => "👏 Great job!",
                5 => "🎉 Nice work!",
                _ => "😅 Phew!",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.screen = Screen::GameOver;
        } else if outcome.is_loss {
            self.stats.record(outcome);
            self.add_message(
                &format!("The word was {}", self.session.target()),
                MessageStyle::Error,
            );
            self.screen = Screen::GameOver;
        } else {
            self.add_message(
                &format!("{} possible words remain", outcome.remaining),
                MessageStyle::Info,
            );
        }
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

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key, Instant::now());
                }
            }
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::interactive::reveal::REVEAL_STEP;
    use crate::wordlists::loader::load_embedded;
    use std::path::PathBuf;

    fn app(target: &str) -> App {
        let dictionary = load_embedded(WordLength::Five).unwrap();
        let session = Session::with_target(dictionary, target).unwrap();
        let mut app = App::new(session, WordSource::Embedded);
        app.screen = Screen::Playing;
        app
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::from(code), now);
    }

    fn type_word(app: &mut App, word: &str, now: Instant) {
        for c in word.chars() {
            press(app, KeyCode::Char(c), now);
        }
        press(app, KeyCode::Enter, now);
    }

    fn finish(app: &mut App, now: Instant) -> Instant {
        let later = now + REVEAL_STEP * 6;
        app.tick(later);
        later
    }

    #[test]
    fn typing_is_limited_to_word_length() {
        let mut app = app("crane");
        let now = Instant::now();
        for c in "slates1".chars() {
            press(&mut app, KeyCode::Char(c), now);
        }
        assert_eq!(app.input_buffer, "SLATE");
        press(&mut app, KeyCode::Backspace, now);
        assert_eq!(app.input_buffer, "SLAT");
    }

    #[test]
    fn keyboard_updates_when_reveal_completes() {
        let mut app = app("crane");
        let now = Instant::now();
        type_word(&mut app, "slate", now);

        assert!(app.is_revealing());
        assert_eq!(app.keyboard_shown.status(b'A'), None);
        assert_eq!(app.session.keyboard().status(b'A'), Some(LetterStatus::Green));

        finish(&mut app, now);
        assert!(!app.is_revealing());
        assert_eq!(app.keyboard_shown.status(b'A'), Some(LetterStatus::Green));
        assert_eq!(app.remaining_shown, app.session.remaining());
    }

    #[test]
    fn input_is_ignored_while_revealing() {
        let mut app = app("crane");
        let now = Instant::now();
        type_word(&mut app, "slate", now);
        type_word(&mut app, "adieu", now);

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.record().len(), 1);
    }

    #[test]
    fn invalid_guess_keeps_input() {
        let mut app = app("crane");
        type_word(&mut app, "qqqqq", Instant::now());

        assert!(!app.is_revealing());
        assert_eq!(app.input_buffer, "QQQQQ");
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn win_moves_to_game_over_after_reveal() {
        let mut app = app("crane");
        let now = Instant::now();
        type_word(&mut app, "crane", now);
        assert_eq!(app.screen, Screen::Playing);

        finish(&mut app, now);
        assert_eq!(app.screen, Screen::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
    }

    #[test]
    fn loss_is_counted() {
        let mut app = app("crane");
        let mut now = Instant::now();
        for guess in ["adieu", "story", "about", "light", "shock", "flame"] {
            type_word(&mut app, guess, now);
            now = finish(&mut app, now);
        }
        assert_eq!(app.screen, Screen::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn game_over_keys() {
        let mut app = app("crane");
        let now = Instant::now();
        type_word(&mut app, "crane", now);
        finish(&mut app, now);

        press(&mut app, KeyCode::Char('r'), now);
        assert_eq!(app.screen, Screen::Playing);
        assert!(app.session.record().is_empty());
        assert_eq!(app.keyboard_shown, KeyboardStatus::new());

        app.screen = Screen::GameOver;
        press(&mut app, KeyCode::Char('m'), now);
        assert_eq!(app.screen, Screen::Menu);
    }

    #[test]
    fn menu_selects_length() {
        let mut app = app("crane");
        app.screen = Screen::Menu;
        press(&mut app, KeyCode::Char('4'), Instant::now());

        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.session.length(), WordLength::Four);
        assert_eq!(app.remaining_shown, app.session.dictionary().len());
    }

    #[test]
    fn unusable_word_directory_is_reported_in_panel() {
        let dictionary = load_embedded(WordLength::Five).unwrap();
        let session = Session::with_target(dictionary, "crane").unwrap();
        let source = WordSource::Directory(PathBuf::from("/nonexistent/expanded_wordle"));
        let mut app = App::new(session, source);

        press(&mut app, KeyCode::Char('6'), Instant::now());

        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.session.length(), WordLength::Six);
        assert_eq!(
            app.session.dictionary().len(),
            load_embedded(WordLength::Six).unwrap().len()
        );
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Error
            && m.text.contains("using the built-in list")));
    }

    #[test]
    fn win_rate() {
        let mut stats = Statistics::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);
        stats.total_games = 4;
        stats.games_won = 3;
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }
}
