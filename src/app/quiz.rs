use tracing::warn;

use crate::config::Config;
use crate::models::{AppState, Question};
use crate::quiz::{QuizSession, ResultSummary, SessionError};

/// Terminal state for taking a quiz: which screen is up, the highlighted
/// option and the result scroll position, around one [`QuizSession`].
pub struct QuizApp {
    pub state: AppState,
    session: QuizSession,
    option_cursor: usize,
    result_scroll: usize,
    progress_steps: usize,
}

impl QuizApp {
    pub fn with_questions(questions: Vec<Question>, config: &Config) -> Result<Self, SessionError> {
        Ok(Self {
            state: AppState::Welcome,
            session: QuizSession::new(questions)?,
            option_cursor: 0,
            result_scroll: 0,
            progress_steps: config.progress_steps,
        })
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn progress_steps(&self) -> usize {
        self.progress_steps
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::from_session(&self.session)
    }

    pub fn start_quiz(&mut self) {
        self.state = AppState::Quiz;
    }

    pub fn cursor_down(&mut self) {
        let count = self.session.current_question().options.len();
        self.option_cursor = (self.option_cursor + 1) % count;
    }

    pub fn cursor_up(&mut self) {
        let count = self.session.current_question().options.len();
        self.option_cursor = (self.option_cursor + count - 1) % count;
    }

    /// Answer with the highlighted option.
    pub fn select_highlighted(&mut self) {
        let _ = self.select_option(self.option_cursor);
    }

    /// Answer with `option` and move the cursor onto it.
    pub fn select_option(&mut self, option: usize) -> Result<(), SessionError> {
        match self.session.select_answer(option) {
            Ok(()) => {
                self.option_cursor = option;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "answer rejected");
                Err(err)
            }
        }
    }

    pub fn next_question(&mut self) {
        self.session.next();
        if self.session.is_completed() {
            self.state = AppState::Result;
            self.result_scroll = 0;
        } else {
            self.sync_cursor();
        }
    }

    pub fn previous_question(&mut self) {
        self.session.previous();
        self.sync_cursor();
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.session.total_questions().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Throw away the attempt and start again from the first question.
    pub fn retry(&mut self) {
        self.session.reset();
        self.state = AppState::Quiz;
        self.option_cursor = 0;
        self.result_scroll = 0;
    }

    // Revisited questions open on their recorded answer.
    fn sync_cursor(&mut self) {
        self.option_cursor = self
            .session
            .answer_for(self.session.current_index())
            .unwrap_or(0);
    }
}
