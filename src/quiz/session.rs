//! State machine for a single quiz attempt.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::Question;

/// Smallest number of options a question may offer.
pub const MIN_OPTIONS: usize = 2;

/// Errors raised when building a session or issuing an invalid command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A quiz must contain at least one question.
    #[error("a quiz needs at least one question")]
    EmptyQuiz,

    /// A question offers fewer than [`MIN_OPTIONS`] options.
    #[error("question {id} has {count} option(s), at least 2 are required")]
    TooFewOptions { id: u32, count: usize },

    /// A question marks a non-existent option as correct.
    #[error("question {id} marks option {correct_answer} as correct but has {options} options")]
    CorrectAnswerOutOfRange {
        id: u32,
        correct_answer: usize,
        options: usize,
    },

    /// `select_answer` was called with an index the current question lacks.
    #[error("option {option} is out of range for a question with {options} options")]
    OptionOutOfRange { option: usize, options: usize },
}

/// Where the attempt currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Answering the question at this position.
    InProgress(usize),
    /// Advanced past the last question.
    Completed,
}

/// Checks that every question is well formed and that there is at least one.
pub fn validate_questions(questions: &[Question]) -> Result<(), SessionError> {
    if questions.is_empty() {
        return Err(SessionError::EmptyQuiz);
    }

    for question in questions {
        let count = question.options.len();
        if count < MIN_OPTIONS {
            return Err(SessionError::TooFewOptions {
                id: question.id,
                count,
            });
        }
        if question.correct_answer >= count {
            return Err(SessionError::CorrectAnswerOutOfRange {
                id: question.id,
                correct_answer: question.correct_answer,
                options: count,
            });
        }
    }

    Ok(())
}

/// One run through a fixed, ordered set of questions.
///
/// The session is mutated only through [`select_answer`](Self::select_answer),
/// [`next`](Self::next), [`previous`](Self::previous) and [`reset`](Self::reset).
/// Once completed, everything except `reset` is ignored.
#[derive(Debug, Clone)]
pub struct QuizSession {
    attempt_id: Uuid,
    questions: Vec<Question>,
    current_index: usize,
    selected_answers: BTreeMap<usize, usize>,
    completed: bool,
}

impl QuizSession {
    /// Create a session over `questions`.
    ///
    /// Fails if the list is empty or any question is malformed.
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        validate_questions(&questions)?;

        let session = Self {
            attempt_id: Uuid::new_v4(),
            questions,
            current_index: 0,
            selected_answers: BTreeMap::new(),
            completed: false,
        };
        info!(
            attempt = %session.attempt_id,
            questions = session.questions.len(),
            "quiz session created"
        );
        Ok(session)
    }

    pub fn attempt_id(&self) -> Uuid {
        self.attempt_id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn state(&self) -> SessionState {
        if self.completed {
            SessionState::Completed
        } else {
            SessionState::InProgress(self.current_index)
        }
    }

    /// Recorded answers keyed by question position.
    pub fn selected_answers(&self) -> &BTreeMap<usize, usize> {
        &self.selected_answers
    }

    pub fn answer_for(&self, position: usize) -> Option<usize> {
        self.selected_answers.get(&position).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.selected_answers.len()
    }

    /// Record `option` as the answer to the current question.
    ///
    /// Any previous answer for this position is overwritten. Ignored once the
    /// session is completed.
    pub fn select_answer(&mut self, option: usize) -> Result<(), SessionError> {
        if self.completed {
            debug!(attempt = %self.attempt_id, option, "answer ignored, quiz completed");
            return Ok(());
        }

        let options = self.current_question().options.len();
        if option >= options {
            return Err(SessionError::OptionOutOfRange { option, options });
        }

        let previous = self.selected_answers.insert(self.current_index, option);
        debug!(
            attempt = %self.attempt_id,
            position = self.current_index,
            option,
            ?previous,
            "answer selected"
        );
        Ok(())
    }

    /// Whether the current question has an answer and the quiz is not over.
    pub fn can_advance(&self) -> bool {
        !self.completed && self.selected_answers.contains_key(&self.current_index)
    }

    /// Move to the next question, or complete the quiz from the last one.
    ///
    /// Does nothing unless [`can_advance`](Self::can_advance) holds.
    pub fn next(&mut self) {
        if !self.can_advance() {
            return;
        }

        if self.is_last_question() {
            self.completed = true;
            info!(
                attempt = %self.attempt_id,
                score = self.score(),
                total = self.questions.len(),
                "quiz completed"
            );
        } else {
            self.current_index += 1;
            debug!(attempt = %self.attempt_id, position = self.current_index, "next question");
        }
    }

    /// Move back one question. No-op at the first question or once completed.
    pub fn previous(&mut self) {
        if self.completed || self.current_index == 0 {
            return;
        }
        self.current_index -= 1;
        debug!(attempt = %self.attempt_id, position = self.current_index, "previous question");
    }

    /// Number of positions whose recorded answer is correct.
    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .enumerate()
            .filter(|(position, question)| {
                self.answer_for(*position)
                    .is_some_and(|answer| question.is_correct(answer))
            })
            .count()
    }

    /// Start over with no answers. A new attempt id is issued.
    pub fn reset(&mut self) {
        let finished = self.attempt_id;
        self.attempt_id = Uuid::new_v4();
        self.current_index = 0;
        self.selected_answers.clear();
        self.completed = false;
        info!(previous = %finished, attempt = %self.attempt_id, "quiz reset");
    }
}
