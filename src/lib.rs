//! # athena-study
//!
//! Study tools for the terminal: a quiz session engine and a keyboard-driven
//! video feed navigator, with ratatui views on top.
//!
//! The engines in [`quiz`] and [`feed`] are plain synchronous state
//! machines and can be used without a terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use athena_study::{Config, Quiz, StudyError};
//!
//! fn main() -> Result<(), StudyError> {
//!     let config = Config::default();
//!
//!     // Load questions from a JSON file
//!     let quiz = Quiz::from_json("questions.json", &config)?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
mod data;
pub mod feed;
mod models;
pub mod observability;
pub mod quiz;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Frame;
use thiserror::Error;

pub use app::{FeedApp, FeedMode, QuizApp};
pub use config::{Config, ConfigError};
pub use data::{
    load_feed_from_json, load_questions_from_json, parse_feed, parse_questions, DataError,
    LoadError,
};
pub use feed::{FeedNavigator, NavigatorError};
pub use models::{AppState, FeedItem, Question};
pub use quiz::{QuizSession, SessionError};

/// Error type for study operations.
#[derive(Debug, Error)]
pub enum StudyError {
    /// Error loading questions or feed items from a file.
    #[error("failed to load data: {0}")]
    Load(#[from] LoadError),

    /// The questions cannot form a quiz.
    #[error("invalid quiz: {0}")]
    Session(#[from] SessionError),

    /// The items cannot form a feed.
    #[error("invalid feed: {0}")]
    Navigator(#[from] NavigatorError),

    /// The configuration file is unreadable or invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error while driving the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, StudyError>;

/// A view the terminal event loop can drive.
pub trait Screen {
    fn draw(&mut self, frame: &mut Frame);

    /// Returns true if the app should exit.
    fn handle_key(&mut self, key: KeyCode, now: Instant) -> bool;
}

impl Screen for QuizApp {
    fn draw(&mut self, frame: &mut Frame) {
        ui::render_quiz(frame, self);
    }

    fn handle_key(&mut self, key: KeyCode, _now: Instant) -> bool {
        handle_quiz_input(self, key)
    }
}

impl Screen for FeedApp {
    fn draw(&mut self, frame: &mut Frame) {
        ui::render_feed(frame, self);
    }

    fn handle_key(&mut self, key: KeyCode, now: Instant) -> bool {
        handle_feed_input(self, key, now)
    }
}

/// A quiz that can be run in the terminal.
pub struct Quiz {
    app: QuizApp,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<Question>, config: &Config) -> Result<Self> {
        Ok(Self {
            app: QuizApp::with_questions(questions, config)?,
        })
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use athena_study::{Config, Quiz};
    ///
    /// let quiz = Quiz::from_json("questions.json", &Config::default()).expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, config: &Config) -> Result<Self> {
        let questions = load_questions_from_json(path)?;
        Self::new(questions, config)
    }

    /// Run the quiz in the terminal until the user quits.
    pub fn run(mut self) -> Result<()> {
        run_screen(&mut self.app)
    }

    pub fn app(&self) -> &QuizApp {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut QuizApp {
        &mut self.app
    }
}

/// A video feed that can be browsed in the terminal.
pub struct Feed {
    app: FeedApp,
}

impl Feed {
    pub fn new(items: Vec<FeedItem>, config: &Config) -> Result<Self> {
        Ok(Self {
            app: FeedApp::with_items(items, config)?,
        })
    }

    pub fn from_json<P: AsRef<Path>>(path: P, config: &Config) -> Result<Self> {
        let items = load_feed_from_json(path)?;
        Self::new(items, config)
    }

    /// Run the feed in the terminal until the user quits.
    pub fn run(mut self) -> Result<()> {
        run_screen(&mut self.app)
    }

    pub fn app(&self) -> &FeedApp {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut FeedApp {
        &mut self.app
    }
}

fn run_screen<S: Screen>(screen: &mut S) -> Result<()> {
    let mut session = terminal::TerminalSession::start()?;
    run_event_loop(session.terminal(), screen)
}

fn run_event_loop<S: Screen>(terminal: &mut terminal::AppTerminal, screen: &mut S) -> Result<()> {
    loop {
        terminal.draw(|frame| screen.draw(frame))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if screen.handle_key(key.code, Instant::now()) {
                tracing::debug!("quit requested");
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_quiz_input(app: &mut QuizApp, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_question_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut QuizApp, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_question_input(app: &mut QuizApp, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.cursor_up();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.cursor_down();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.select_highlighted();
            false
        }
        KeyCode::Char(c @ '1'..='9') => {
            let _ = app.select_option(c as usize - '1' as usize);
            false
        }
        KeyCode::Right | KeyCode::Char('n') => {
            app.next_question();
            false
        }
        KeyCode::Left | KeyCode::Char('p') => {
            app.previous_question();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut QuizApp, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.retry();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

/// Returns true if the app should exit.
fn handle_feed_input(app: &mut FeedApp, key: KeyCode, now: Instant) -> bool {
    match app.mode() {
        FeedMode::Browse => handle_browse_input(app, key, now),
        FeedMode::Search => {
            handle_search_input(app, key, now);
            false
        }
    }
}

fn handle_browse_input(app: &mut FeedApp, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_next(now);
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_previous(now);
            false
        }
        KeyCode::Char(c @ '1'..='9') => {
            app.set_active(c as usize - '1' as usize);
            false
        }
        KeyCode::Tab => {
            app.next_subject();
            false
        }
        KeyCode::BackTab => {
            app.previous_subject();
            false
        }
        KeyCode::Char('/') => {
            app.begin_search();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_search_input(app: &mut FeedApp, key: KeyCode, now: Instant) {
    match key {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => app.finish_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Down => {
            app.move_next(now);
        }
        KeyCode::Up => {
            app.move_previous(now);
        }
        KeyCode::Char(c) => app.push_search_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn quiz_app() -> QuizApp {
        let questions = parse_questions(include_str!("../assets/questions.json")).unwrap();
        QuizApp::with_questions(questions, &Config::default()).unwrap()
    }

    fn feed_app() -> FeedApp {
        let items = parse_feed(include_str!("../assets/feed.json")).unwrap();
        FeedApp::with_items(items, &Config::default()).unwrap()
    }

    fn press(app: &mut QuizApp, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| handle_quiz_input(app, *key))
    }

    #[test]
    fn test_full_quiz_by_keyboard() {
        let mut app = quiz_app();
        assert!(!press(&mut app, &[KeyCode::Enter]));
        assert_eq!(app.state, AppState::Quiz);

        for answer in ['2', '2', '3', '3', '2'] {
            press(&mut app, &[KeyCode::Char(answer), KeyCode::Char('n')]);
        }

        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.session().score(), 5);

        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session().answered_count(), 0);

        assert!(press(&mut app, &[KeyCode::Char('q')]));
    }

    #[test]
    fn test_cursor_and_enter_select_answer() {
        let mut app = quiz_app();
        press(
            &mut app,
            &[KeyCode::Enter, KeyCode::Down, KeyCode::Down, KeyCode::Up, KeyCode::Enter],
        );
        assert_eq!(app.session().answer_for(0), Some(1));

        press(&mut app, &[KeyCode::Right, KeyCode::Left]);
        assert_eq!(app.session().current_index(), 0);
        assert_eq!(app.option_cursor(), 1);
    }

    #[test]
    fn test_next_without_answer_stays_put() {
        let mut app = quiz_app();
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('n'), KeyCode::Char('n')]);
        assert_eq!(app.session().current_index(), 0);
        assert_eq!(app.state, AppState::Quiz);
    }

    #[test]
    fn test_digit_beyond_options_is_ignored() {
        let mut app = quiz_app();
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('9')]);
        assert_eq!(app.session().answer_for(0), None);
    }

    #[test]
    fn test_feed_keys_move_and_filter() {
        let mut app = feed_app();
        let start = Instant::now();

        handle_feed_input(&mut app, KeyCode::Char('j'), start);
        handle_feed_input(&mut app, KeyCode::Char('j'), start + Duration::from_millis(10));
        assert_eq!(app.navigator().active_index(), Some(1));

        handle_feed_input(&mut app, KeyCode::Char('8'), start);
        assert_eq!(app.navigator().active_index(), Some(7));
        handle_feed_input(&mut app, KeyCode::Down, start + Duration::from_secs(1));
        assert_eq!(app.navigator().active_index(), Some(7));

        handle_feed_input(&mut app, KeyCode::BackTab, start);
        assert_eq!(app.filter().subject().label(), "Economics");
        assert_eq!(app.navigator().len(), 1);
        assert_eq!(app.navigator().active_index(), Some(0));
    }

    #[test]
    fn test_feed_search_mode_captures_letters() {
        let mut app = feed_app();
        let now = Instant::now();

        handle_feed_input(&mut app, KeyCode::Char('/'), now);
        assert_eq!(app.mode(), FeedMode::Search);
        for c in "neural".chars() {
            assert!(!handle_feed_input(&mut app, KeyCode::Char(c), now));
        }
        assert!(!handle_feed_input(&mut app, KeyCode::Char('q'), now));
        handle_feed_input(&mut app, KeyCode::Backspace, now);
        assert_eq!(app.filter().query(), "neural");
        assert_eq!(app.navigator().len(), 1);

        handle_feed_input(&mut app, KeyCode::Enter, now);
        assert_eq!(app.mode(), FeedMode::Browse);
        assert_eq!(app.filter().query(), "neural");

        assert!(handle_feed_input(&mut app, KeyCode::Char('q'), now));
    }
}
