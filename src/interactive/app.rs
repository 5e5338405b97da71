//! TUI application state and logic

use crate::core::{GuessOutcome, WIN_REWARD};
use crate::error::GameError;
use crate::game::{RoundEngine, Store};
use crate::wordbank::split_word_list;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S: Store, R: Rng = StdRng> {
    pub engine: RoundEngine<S, R>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub category_cursor: usize,
    pub form: AddWordsForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    CategorySelect,
    AddWords,
}

/// Fields of the add-words popup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddWordsForm {
    pub category: String,
    pub words: String,
    pub focus: FormField,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Category,
    Words,
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
    Warning,
    Error,
}

impl<S: Store, R: Rng> App<S, R> {
    #[must_use]
    pub fn new(engine: RoundEngine<S, R>) -> Self {
        let mut app = Self {
            engine,
            input_mode: InputMode::Guessing,
            messages: Vec::new(),
            should_quit: false,
            category_cursor: 0,
            form: AddWordsForm::default(),
        };
        app.add_message("Welcome! Type a letter to guess.", MessageStyle::Info);
        app.add_message(
            &format!("Category: {}", app.engine.category()),
            MessageStyle::Info,
        );
        app
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

    /// Route a key press to the handler for the current mode
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails to persist the high score or the
    /// word bank. Validation problems are reported as messages instead.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::Guessing => self.handle_guessing_key(key),
            InputMode::CategorySelect => self.handle_category_key(key),
            InputMode::AddWords => self.handle_form_key(key),
        }
    }

    fn handle_guessing_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => {
                self.engine.next_round()?;
                self.add_message("New round started!", MessageStyle::Info);
            }
            KeyCode::Char('r') if ctrl => {
                self.engine.start_round(None)?;
                let text = format!("New round in {}", self.engine.category());
                self.add_message(&text, MessageStyle::Info);
            }
            KeyCode::Char('a') if ctrl => {
                self.form = AddWordsForm {
                    category: self.engine.category().to_string(),
                    ..AddWordsForm::default()
                };
                self.input_mode = InputMode::AddWords;
            }
            KeyCode::Tab => {
                self.category_cursor = self
                    .engine
                    .categories()
                    .position(|c| c == self.engine.category())
                    .unwrap_or(0);
                self.input_mode = InputMode::CategorySelect;
            }
            KeyCode::Enter if self.engine.round().is_finished() => {
                self.engine.next_round()?;
                self.add_message("New round started!", MessageStyle::Info);
            }
            KeyCode::Char(c) if !ctrl => self.guess(c)?,
            _ => {}
        }
        Ok(())
    }

    fn handle_category_key(&mut self, key: KeyEvent) -> Result<()> {
        let count = self.engine.bank().category_count();
        match key.code {
            KeyCode::Esc | KeyCode::Tab => self.input_mode = InputMode::Guessing,
            KeyCode::Up => {
                self.category_cursor = self.category_cursor.checked_sub(1).unwrap_or(count - 1);
            }
            KeyCode::Down => {
                self.category_cursor = (self.category_cursor + 1) % count;
            }
            KeyCode::Enter => {
                let chosen = self
                    .engine
                    .categories()
                    .nth(self.category_cursor)
                    .map(str::to_string);
                if let Some(category) = chosen {
                    self.engine.start_round(Some(&category))?;
                    self.add_message(&format!("Category: {category}"), MessageStyle::Info);
                }
                self.input_mode = InputMode::Guessing;
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Guessing;
                self.add_message("Cancelled adding words", MessageStyle::Info);
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.form.focus = match self.form.focus {
                    FormField::Category => FormField::Words,
                    FormField::Words => FormField::Category,
                };
            }
            KeyCode::Char(c) => self.focused_field().push(c),
            KeyCode::Backspace => {
                self.focused_field().pop();
            }
            KeyCode::Enter => self.submit_words()?,
            _ => {}
        }
        Ok(())
    }

    fn focused_field(&mut self) -> &mut String {
        match self.form.focus {
            FormField::Category => &mut self.form.category,
            FormField::Words => &mut self.form.words,
        }
    }

    /// Guess a letter and report the outcome as a message
    ///
    /// # Errors
    ///
    /// Returns an error if saving a new high score fails.
    pub fn guess(&mut self, c: char) -> Result<()> {
        let report = match self.engine.guess_letter(c) {
            Ok(report) => report,
            Err(e @ (GameError::InvalidLetter(_) | GameError::RoundOver)) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let letter = report.letter.to_uppercase().to_string();
        match report.outcome {
            GuessOutcome::AlreadyGuessed => {
                self.add_message(
                    &format!("You already tried '{letter}'!"),
                    MessageStyle::Warning,
                );
            }
            GuessOutcome::InProgress => {
                if self.engine.round().contains(report.letter) {
                    self.add_message(&format!("'{letter}' is in the word"), MessageStyle::Success);
                } else {
                    self.add_message(&format!("No '{letter}' in the word"), MessageStyle::Error);
                }
            }
            GuessOutcome::Won => {
                self.add_message(
                    &format!(
                        "🎉 You guessed it: {} (+{WIN_REWARD})",
                        report.word.to_uppercase()
                    ),
                    MessageStyle::Success,
                );
                if report.new_high_score {
                    self.add_message(
                        &format!("🏆 New high score: {}", report.high_score),
                        MessageStyle::Success,
                    );
                }
            }
            GuessOutcome::Lost => {
                self.add_message(
                    &format!("💀 Out of tries! The word was {}", report.word.to_uppercase()),
                    MessageStyle::Error,
                );
            }
        }

        if report.outcome.is_final() && !report.next_round_started {
            self.add_message("Press Enter for the next round", MessageStyle::Info);
        }
        Ok(())
    }

    /// Submit the add-words form
    ///
    /// # Errors
    ///
    /// Returns an error if saving the word bank fails.
    pub fn submit_words(&mut self) -> Result<()> {
        let category = self.form.category.trim().to_string();
        match self
            .engine
            .add_words(&category, &split_word_list(&self.form.words))
        {
            Ok(added) => {
                self.add_message(
                    &format!("Added {added} word(s) to {category}"),
                    MessageStyle::Success,
                );
                self.form = AddWordsForm::default();
                self.input_mode = InputMode::Guessing;
            }
            Err(GameError::Bank(e)) => {
                self.add_message(&format!("Fill in all fields: {e}"), MessageStyle::Error);
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if the game cannot save its data.
pub fn run_tui<S: Store, R: Rng>(app: App<S, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: Store, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<S, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{EngineConfig, MemoryStore};
    use crate::wordbank::WordBank;
    use rand::SeedableRng;

    fn app_with(config: EngineConfig) -> App<MemoryStore, StdRng> {
        let bank = WordBank::from_categories([
            ("Животные", vec!["кот"]),
            ("Города", vec!["рим"]),
        ])
        .unwrap();
        let engine = RoundEngine::with_rng(
            MemoryStore::with_bank(bank),
            config.with_initial_category(Some("Животные".to_string())),
            StdRng::seed_from_u64(11),
        )
        .unwrap();
        App::new(engine)
    }

    fn press(app: &mut App<MemoryStore, StdRng>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn ctrl(app: &mut App<MemoryStore, StdRng>, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn last_message(app: &App<MemoryStore, StdRng>) -> &Message {
        app.messages.last().unwrap()
    }

    #[test]
    fn letters_are_guessed() {
        let mut app = app_with(EngineConfig::default());
        press(&mut app, KeyCode::Char('к'));

        assert_eq!(app.engine.render_word(), vec!['к', '_', '_']);
        assert_eq!(last_message(&app).style, MessageStyle::Success);
    }

    #[test]
    fn repeated_letter_warns() {
        let mut app = app_with(EngineConfig::default());
        press(&mut app, KeyCode::Char('я'));
        press(&mut app, KeyCode::Char('я'));

        assert_eq!(last_message(&app).style, MessageStyle::Warning);
        assert_eq!(app.engine.round().attempts_used(), 1);
    }

    #[test]
    fn win_is_announced() {
        let mut app = app_with(EngineConfig::default());
        for c in ['к', 'о', 'т'] {
            press(&mut app, KeyCode::Char(c));
        }

        let reward = format!("(+{WIN_REWARD})");
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("КОТ") && m.text.contains(&reward))
        );
        assert_eq!(app.engine.current_score(), 10);
    }

    #[test]
    fn paused_round_continues_on_enter() {
        let mut app = app_with(EngineConfig::default().with_auto_advance(false));
        for c in ['к', 'о', 'т'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(app.engine.round().is_finished());

        press(&mut app, KeyCode::Enter);
        assert!(!app.engine.round().is_finished());
    }

    #[test]
    fn category_picker_switches_category() {
        let mut app = app_with(EngineConfig::default());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::CategorySelect);

        // Categories are sorted: Города, Животные
        assert_eq!(app.category_cursor, 1);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.engine.category(), "Города");
    }

    #[test]
    fn category_cursor_wraps() {
        let mut app = app_with(EngineConfig::default());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.category_cursor, 0);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.category_cursor, 1);
    }

    #[test]
    fn add_words_form_submits() {
        let mut app = app_with(EngineConfig::default());
        ctrl(&mut app, 'a');
        assert_eq!(app.input_mode, InputMode::AddWords);
        assert_eq!(app.form.category, "Животные");

        press(&mut app, KeyCode::Tab);
        for c in "лев, тигр".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(
            app.engine.bank().words("Животные").unwrap(),
            &["кот", "лев", "тигр"]
        );
    }

    #[test]
    fn add_words_form_keeps_open_on_validation_error() {
        let mut app = app_with(EngineConfig::default());
        ctrl(&mut app, 'a');
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::AddWords);
        assert_eq!(last_message(&app).style, MessageStyle::Error);
    }

    #[test]
    fn escape_quits_and_ctrl_c_quits_anywhere() {
        let mut app = app_with(EngineConfig::default());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = app_with(EngineConfig::default());
        press(&mut app, KeyCode::Tab);
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app_with(EngineConfig::default());
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(last_message(&app).text, "message 9");
    }
}
