use std::io;

use thiserror::Error;

use crate::models::Phase;

/// Errors raised by assessment operations.
///
/// Every variant is recoverable: the controller's state is left untouched
/// when an operation fails.
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// Input the user must correct before continuing, such as a blank name.
    #[error("{0}")]
    Validation(String),

    /// Submission attempted before every question was answered.
    #[error("{answered} of {total} questions answered, {} remaining", .unanswered.len())]
    IncompleteAssessment {
        answered: usize,
        total: usize,
        unanswered: Vec<usize>,
    },

    /// Certificate requested without a passing result.
    #[error("{0}")]
    Precondition(String),

    #[error("cannot {operation} while the assessment is {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },

    #[error("option {option} is out of range, the question has {options} options")]
    OptionOutOfRange { option: usize, options: usize },

    #[error("failed to encode certificate: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to write certificate: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, AssessmentError>;
