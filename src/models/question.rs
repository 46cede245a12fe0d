use serde::{Deserialize, Serialize};

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub correct_answer: usize,
    pub explanation: String,
    pub category: String,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        self.correct_answer == option
    }
}

/// Number of bank questions carrying a category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}
