use serde::Serialize;

use super::{AnswerRecord, Question};

/// Outcome of a submitted assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    /// Number of questions answered correctly.
    pub correct_count: usize,
    /// Rounded score out of 100.
    pub percentage: u8,
    /// Whether `percentage` reached the pass threshold.
    pub passed: bool,
    /// Selections as they were at submission time.
    pub answers: AnswerRecord,
    /// Wall-clock time between start and submit, rounded to minutes.
    pub elapsed_minutes: u64,
}

/// Correct answers within one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: String,
    pub correct: usize,
    pub total: usize,
}

impl CategoryScore {
    pub fn percentage(&self) -> u8 {
        crate::scoring::percentage(self.correct, self.total)
    }
}

/// One line of the detailed review shown after submission.
#[derive(Debug, Clone, Copy)]
pub struct QuestionReview<'a> {
    pub index: usize,
    pub question: &'a Question,
    pub selected: Option<usize>,
    pub is_correct: bool,
}
