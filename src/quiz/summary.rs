//! Read-only results derived from a quiz session.

use super::session::QuizSession;

/// How one question went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub position: usize,
    pub question_id: u32,
    pub text: String,
    pub chosen: Option<usize>,
    pub correct_answer: usize,
    pub is_correct: bool,
}

/// Closing remark shown with the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Perfect,
    OnTrack,
    KeepStudying,
}

impl Feedback {
    pub fn message(self) -> &'static str {
        match self {
            Feedback::Perfect => "Perfect! You got all questions correct.",
            Feedback::OnTrack => "Good job! You're on the right track.",
            Feedback::KeepStudying => "Keep studying. You'll do better next time.",
        }
    }
}

/// Score and per-question breakdown of an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub score: usize,
    pub total: usize,
    pub outcomes: Vec<QuestionOutcome>,
}

impl ResultSummary {
    pub fn from_session(session: &QuizSession) -> Self {
        let outcomes = session
            .questions()
            .iter()
            .enumerate()
            .map(|(position, question)| {
                let chosen = session.answer_for(position);
                QuestionOutcome {
                    position,
                    question_id: question.id,
                    text: question.text.clone(),
                    chosen,
                    correct_answer: question.correct_answer,
                    is_correct: chosen.is_some_and(|answer| question.is_correct(answer)),
                }
            })
            .collect();

        Self {
            score: session.score(),
            total: session.total_questions(),
            outcomes,
        }
    }

    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.score as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Number of filled dots out of `steps`, rounded to the nearest dot.
    pub fn progress_dots(&self, steps: usize) -> usize {
        if self.total == 0 {
            return 0;
        }
        let filled = (self.score as f64 / self.total as f64 * steps as f64).round() as usize;
        filled.min(steps)
    }

    pub fn feedback(&self) -> Feedback {
        if self.score == self.total {
            Feedback::Perfect
        } else if self.score * 2 > self.total {
            Feedback::OnTrack
        } else {
            Feedback::KeepStudying
        }
    }
}
