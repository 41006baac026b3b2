//! TUI application state and logic

use crate::core::{GameState, is_too_short_hint};
use crate::session::{GameSession, Outcome, SessionError};
use crate::validator::{Dictionary, Rejection, SpellChecker};
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
pub struct App<S: SpellChecker = Dictionary, R: Rng = StdRng> {
    pub session: GameSession<S, R>,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// Modal alert shown for a rejected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl From<Rejection> for Alert {
    fn from(rejection: Rejection) -> Self {
        Self {
            title: rejection.title().to_string(),
            message: rejection.message().to_string(),
        }
    }
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

impl<S: SpellChecker, R: Rng> App<S, R> {
    /// Wrap a session, starting its first game if needed
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::WordListUnavailable`] if no game can start.
    pub fn new(mut session: GameSession<S, R>) -> Result<Self, SessionError> {
        if !session.is_playing() {
            session.start()?;
        }

        let mut app = Self {
            session,
            input_buffer: String::new(),
            alert: None,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Make words of four letters or more from the root word.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.session.state()
    }

    /// Whether the "word is too short" hint should show under the input
    #[must_use]
    pub fn show_too_short_hint(&self) -> bool {
        is_too_short_hint(&self.input_buffer)
    }

    /// Submit the input buffer
    ///
    /// The buffer is cleared only when the word is accepted. Too-short words
    /// are dropped without an alert.
    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();
        match self.session.submit(&input) {
            Ok(Outcome::Accepted { word, points }) => {
                self.input_buffer.clear();
                self.add_message(&format!("+{points} {word}"), MessageStyle::Success);
            }
            Ok(Outcome::Rejected(rejection)) if rejection.is_silent() => {}
            Ok(Outcome::Rejected(rejection)) => {
                self.add_message(
                    &format!("{}: {}", rejection.title(), input.trim()),
                    MessageStyle::Error,
                );
                self.alert = Some(Alert::from(rejection));
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Start over on a new root word
    pub fn restart(&mut self) {
        self.input_buffer.clear();
        self.alert = None;

        match self.session.restart() {
            Ok(state) => {
                let text = format!("New game: {}", state.root_word().to_uppercase());
                self.add_message(&text, MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
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

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.restart();
                return;
            }
            KeyCode::F(5) => {
                self.restart();
                return;
            }
            _ => {}
        }

        // An open alert swallows everything until dismissed
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Esc if self.input_buffer.is_empty() => self.should_quit = true,
            KeyCode::Esc => self.input_buffer.clear(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if !ctrl => self.input_buffer.push(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SpellChecker, R: Rng>(app: App<S, R>) -> Result<()> {
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S, R>(terminal: &mut Terminal<B>, mut app: App<S, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: SpellChecker,
    R: Rng,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    if let Some(state) = app.state() {
        log::info!(
            "quit with score {} after {} words",
            state.score(),
            state.used_words().len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::WordValidator;
    use rand::SeedableRng;

    fn app() -> App {
        let session = GameSession::new(
            WordValidator::new(Dictionary::new("en", ["lines", "tiles", "listen"])),
            vec!["silent".to_string()],
            StdRng::seed_from_u64(3),
        );
        App::new(session).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn new_app_starts_a_game() {
        let app = app();
        assert_eq!(app.state().unwrap().root_word(), "silent");
        assert!(app.alert.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn new_app_with_empty_list_fails() {
        let session = GameSession::new(
            WordValidator::new(Dictionary::new("en", ["lines"])),
            Vec::new(),
            StdRng::seed_from_u64(3),
        );
        assert_eq!(App::new(session).err(), Some(SessionError::WordListUnavailable));
    }

    #[test]
    fn accepted_word_clears_input() {
        let mut app = app();
        type_word(&mut app, "lines");
        press(&mut app, KeyCode::Enter);

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.state().unwrap().score(), 5);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn too_short_is_silent_and_keeps_input() {
        let mut app = app();
        type_word(&mut app, "tin");
        assert!(app.show_too_short_hint());
        press(&mut app, KeyCode::Enter);

        assert!(app.alert.is_none());
        assert_eq!(app.input_buffer, "tin");
        assert_eq!(app.state().unwrap().score(), 0);
    }

    #[test]
    fn rejection_opens_alert() {
        let mut app = app();
        type_word(&mut app, "zzzzz");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.alert, Some(Alert::from(Rejection::NotPossible)));
        assert_eq!(app.input_buffer, "zzzzz");
    }

    #[test]
    fn alert_is_modal_until_dismissed() {
        let mut app = app();
        type_word(&mut app, "stile");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.alert, Some(Alert::from(Rejection::NotReal)));

        // Typing is ignored while the alert is open
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input_buffer, "stile");

        press(&mut app, KeyCode::Enter);
        assert!(app.alert.is_none());
    }

    #[test]
    fn duplicate_word_alerts_not_original() {
        let mut app = app();
        type_word(&mut app, "lines");
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "lines");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.alert, Some(Alert::from(Rejection::NotOriginal)));
        assert_eq!(app.state().unwrap().score(), 5);
    }

    #[test]
    fn backspace_and_escape_edit_input() {
        let mut app = app();
        type_word(&mut app, "lin");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "li");

        press(&mut app, KeyCode::Esc);
        assert!(app.input_buffer.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_r_restarts() {
        let mut app = app();
        type_word(&mut app, "lines");
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "til");

        ctrl(&mut app, 'r');

        let state = app.state().unwrap();
        assert_eq!(state.score(), 0);
        assert!(state.used_words().is_empty());
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
