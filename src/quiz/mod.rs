//! Quiz attempt engine: sequencing, answer recording, scoring and retry.

mod session;
mod summary;

pub use session::{validate_questions, QuizSession, SessionError, SessionState, MIN_OPTIONS};
pub use summary::{Feedback, QuestionOutcome, ResultSummary};
