mod answers;
mod question;
mod result;

pub use answers::AnswerRecord;
pub use question::{CategoryCount, Question, OPTIONS_PER_QUESTION};
pub use result::{AssessmentResult, CategoryScore, QuestionReview};

use serde::Serialize;

/// Phase of an assessment session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// No session yet, waiting for a name.
    NotStarted,
    /// Questions are being answered.
    InProgress,
    /// Submitted and scored.
    Completed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Phase::NotStarted => "not started",
            Phase::InProgress => "in progress",
            Phase::Completed => "completed",
        };
        f.write_str(label)
    }
}
