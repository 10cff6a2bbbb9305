use serde::{Deserialize, Serialize};

/// A multiple-choice question. Options are addressed by their index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    #[serde(alias = "correctAnswer")]
    pub correct_answer: usize,
}

impl Question {
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn is_correct(&self, option: usize) -> bool {
        self.correct_answer == option
    }
}
