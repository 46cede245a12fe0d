//! Pure scoring functions over a question bank and a set of answers.

use chrono::{DateTime, Utc};

use crate::data::QuestionBank;
use crate::models::{AnswerRecord, AssessmentResult, CategoryScore, QuestionReview};

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Score a submission.
///
/// Unanswered questions count as incorrect. Calling this twice with the same
/// inputs yields the same result.
pub fn score(
    bank: &QuestionBank,
    answers: &AnswerRecord,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    pass_threshold: u8,
) -> AssessmentResult {
    let correct_count = count_correct(bank, answers);
    let percentage = percentage(correct_count, bank.len());

    AssessmentResult {
        correct_count,
        percentage,
        passed: is_passing(percentage, pass_threshold),
        answers: answers.clone(),
        elapsed_minutes: elapsed_minutes(started_at, finished_at),
    }
}

pub fn count_correct(bank: &QuestionBank, answers: &AnswerRecord) -> usize {
    bank.questions()
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            answers
                .get(*index)
                .is_some_and(|option| question.is_correct(option))
        })
        .count()
}

/// `round(correct / total * 100)` with halves rounded up, computed exactly.
/// An empty bank scores 0.
pub fn percentage(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total) as u64;
    let total = total as u64;
    ((200 * correct + total) / (2 * total)) as u8
}

pub fn is_passing(percentage: u8, pass_threshold: u8) -> bool {
    percentage >= pass_threshold
}

/// Whole minutes between two instants, rounded to nearest. Never negative.
pub fn elapsed_minutes(started_at: DateTime<Utc>, finished_at: DateTime<Utc>) -> u64 {
    let millis = (finished_at - started_at).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    ((millis + MILLIS_PER_MINUTE / 2) / MILLIS_PER_MINUTE) as u64
}

/// Correct/total per category, in order of first appearance in the bank.
pub fn category_breakdown(bank: &QuestionBank, answers: &AnswerRecord) -> Vec<CategoryScore> {
    let mut scores: Vec<CategoryScore> = Vec::new();

    for (index, question) in bank.questions().iter().enumerate() {
        let correct = answers
            .get(index)
            .is_some_and(|option| question.is_correct(option));

        let position = match scores.iter().position(|s| s.category == question.category) {
            Some(position) => position,
            None => {
                scores.push(CategoryScore {
                    category: question.category.clone(),
                    correct: 0,
                    total: 0,
                });
                scores.len() - 1
            }
        };

        let entry = &mut scores[position];
        entry.total += 1;
        if correct {
            entry.correct += 1;
        }
    }

    scores
}

/// Per-question outcome, in bank order.
pub fn review<'a>(bank: &'a QuestionBank, answers: &AnswerRecord) -> Vec<QuestionReview<'a>> {
    bank.questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let selected = answers.get(index);
            QuestionReview {
                index,
                question,
                selected,
                is_correct: selected.is_some_and(|option| question.is_correct(option)),
            }
        })
        .collect()
}
