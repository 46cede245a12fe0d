//! The assessment state machine.
//!
//! ```text
//! NotStarted --start(name)--> InProgress
//! InProgress --select_answer/next/previous--> InProgress
//! InProgress --submit() [all answered]--> Completed
//! any        --reset()--> NotStarted
//! ```
//!
//! [`AssessmentController`] owns every piece of session state. Its methods are
//! the only way to change it, and a failed call leaves the state untouched.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::certificate::{self, Certificate, CertificateRequest};
use crate::config::AssessmentConfig;
use crate::data::QuestionBank;
use crate::error::{AssessmentError, Result};
use crate::models::{AnswerRecord, AssessmentResult, CategoryScore, Phase, Question, QuestionReview};
use crate::scoring;

/// Source of wall-clock time for start and submit timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone)]
struct Session {
    name: String,
    cursor: usize,
    answers: AnswerRecord,
    started_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct Completion {
    name: String,
    result: AssessmentResult,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
enum State {
    NotStarted,
    InProgress(Session),
    Completed(Completion),
}

pub struct AssessmentController<C: Clock = SystemClock> {
    bank: QuestionBank,
    config: AssessmentConfig,
    clock: C,
    state: State,
}

impl AssessmentController<SystemClock> {
    pub fn new(bank: QuestionBank, config: AssessmentConfig) -> Self {
        Self::with_clock(bank, config, SystemClock)
    }
}

impl<C: Clock> AssessmentController<C> {
    pub fn with_clock(bank: QuestionBank, config: AssessmentConfig, clock: C) -> Self {
        Self {
            bank,
            config,
            clock,
            state: State::NotStarted,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::NotStarted => Phase::NotStarted,
            State::InProgress(_) => Phase::InProgress,
            State::Completed(_) => Phase::Completed,
        }
    }

    /// Name of the person taking (or having taken) the assessment.
    pub fn name(&self) -> Option<&str> {
        match &self.state {
            State::NotStarted => None,
            State::InProgress(session) => Some(&session.name),
            State::Completed(completion) => Some(&completion.name),
        }
    }

    /// Index of the question on screen. Only meaningful while in progress.
    pub fn cursor(&self) -> Option<usize> {
        match &self.state {
            State::InProgress(session) => Some(session.cursor),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.cursor().and_then(|cursor| self.bank.get(cursor))
    }

    /// Live answers while in progress, the submitted snapshot once completed.
    pub fn answers(&self) -> Option<&AnswerRecord> {
        match &self.state {
            State::NotStarted => None,
            State::InProgress(session) => Some(&session.answers),
            State::Completed(completion) => Some(&completion.result.answers),
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answers().map_or(0, AnswerRecord::len)
    }

    pub fn unanswered(&self) -> Vec<usize> {
        match self.answers() {
            Some(answers) => answers.unanswered(self.total_questions()),
            None => (0..self.total_questions()).collect(),
        }
    }

    /// Position of the cursor through the bank, as a rounded percentage.
    pub fn progress_percent(&self) -> u8 {
        match self.cursor() {
            Some(cursor) => scoring::percentage(cursor + 1, self.total_questions()),
            None => 0,
        }
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            State::NotStarted => None,
            State::InProgress(session) => Some(session.started_at),
            State::Completed(completion) => Some(completion.started_at),
        }
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            State::Completed(completion) => Some(completion.finished_at),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        match &self.state {
            State::Completed(completion) => Some(&completion.result),
            _ => None,
        }
    }

    pub fn category_breakdown(&self) -> Option<Vec<CategoryScore>> {
        self.result()
            .map(|result| scoring::category_breakdown(&self.bank, &result.answers))
    }

    pub fn review(&self) -> Option<Vec<QuestionReview<'_>>> {
        self.result()
            .map(|result| scoring::review(&self.bank, &result.answers))
    }

    /// Begin a fresh session for `name`.
    pub fn start(&mut self, name: &str) -> Result<()> {
        if !matches!(self.state, State::NotStarted) {
            return Err(self.invalid_phase("start"));
        }

        let name = name.trim();
        if name.is_empty() {
            warn!("rejected start without a name");
            return Err(AssessmentError::Validation(
                "Please enter your name before starting the assessment.".to_string(),
            ));
        }

        let started_at = self.clock.now();
        info!(name, questions = self.bank.len(), "assessment started");
        self.state = State::InProgress(Session {
            name: name.to_string(),
            cursor: 0,
            answers: AnswerRecord::new(),
            started_at,
        });
        Ok(())
    }

    /// Select `option` for the current question, replacing any earlier choice.
    pub fn select_answer(&mut self, option: usize) -> Result<()> {
        let options = self
            .current_question()
            .map(|question| question.options.len())
            .ok_or_else(|| self.invalid_phase("select an answer"))?;

        if option >= options {
            warn!(option, options, "rejected out of range option");
            return Err(AssessmentError::OptionOutOfRange { option, options });
        }

        let session = self.session_mut("select an answer")?;
        let previous = session.answers.select(session.cursor, option);
        debug!(question = session.cursor, option, ?previous, "answer selected");
        Ok(())
    }

    /// Move to the next question. Stays put on the last one.
    pub fn next(&mut self) -> Result<()> {
        let last = self.total_questions().saturating_sub(1);
        let session = self.session_mut("move to the next question")?;
        session.cursor = (session.cursor + 1).min(last);
        debug!(cursor = session.cursor, "moved forward");
        Ok(())
    }

    /// Move to the previous question. Stays put on the first one.
    pub fn previous(&mut self) -> Result<()> {
        let session = self.session_mut("move to the previous question")?;
        session.cursor = session.cursor.saturating_sub(1);
        debug!(cursor = session.cursor, "moved back");
        Ok(())
    }

    /// Jump to `index`, clamped to the bank.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        let last = self.total_questions().saturating_sub(1);
        let session = self.session_mut("jump to a question")?;
        session.cursor = index.min(last);
        debug!(cursor = session.cursor, "jumped");
        Ok(())
    }

    /// Score the session. Every question must have an answer.
    pub fn submit(&mut self) -> Result<AssessmentResult> {
        let total = self.total_questions();
        let State::InProgress(session) = &self.state else {
            return Err(self.invalid_phase("submit"));
        };

        let unanswered = session.answers.unanswered(total);
        if !unanswered.is_empty() {
            warn!(remaining = unanswered.len(), "rejected incomplete submission");
            return Err(AssessmentError::IncompleteAssessment {
                answered: session.answers.len(),
                total,
                unanswered,
            });
        }

        let finished_at = self.clock.now();
        let result = scoring::score(
            &self.bank,
            &session.answers,
            session.started_at,
            finished_at,
            self.config.pass_threshold,
        );
        info!(
            correct = result.correct_count,
            percentage = result.percentage,
            passed = result.passed,
            minutes = result.elapsed_minutes,
            "assessment submitted"
        );

        let completion = Completion {
            name: session.name.clone(),
            result: result.clone(),
            started_at: session.started_at,
            finished_at,
        };
        self.state = State::Completed(completion);
        Ok(result)
    }

    /// Drop all session state and return to `NotStarted`.
    pub fn reset(&mut self) {
        info!(from = %self.phase(), "assessment reset");
        self.state = State::NotStarted;
    }

    /// Render the certificate for a passed assessment.
    pub fn certificate(&self, issue_date: NaiveDate) -> Result<Certificate> {
        let State::Completed(completion) = &self.state else {
            return Err(AssessmentError::Precondition(
                "the assessment has not been submitted yet".to_string(),
            ));
        };
        if !completion.result.passed {
            return Err(AssessmentError::Precondition(format!(
                "a score of {}% or higher is required for a certificate",
                self.config.pass_threshold
            )));
        }

        certificate::render(
            &CertificateRequest {
                name: completion.name.clone(),
                percentage: completion.result.percentage,
                issue_date,
            },
            self.config.pass_threshold,
        )
    }

    /// Certificate dated today, in the local time zone.
    pub fn certificate_today(&self) -> Result<Certificate> {
        self.certificate(chrono::Local::now().date_naive())
    }

    fn session_mut(&mut self, operation: &'static str) -> Result<&mut Session> {
        let phase = self.phase();
        match &mut self.state {
            State::InProgress(session) => Ok(session),
            _ => {
                warn!(operation, %phase, "operation rejected in current phase");
                Err(AssessmentError::InvalidPhase { operation, phase })
            }
        }
    }

    fn invalid_phase(&self, operation: &'static str) -> AssessmentError {
        let phase = self.phase();
        warn!(operation, %phase, "operation rejected in current phase");
        AssessmentError::InvalidPhase { operation, phase }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::{Duration, TimeZone};

    use super::*;

    #[derive(Clone)]
    struct ManualClock(Rc<Cell<DateTime<Utc>>>);

    impl ManualClock {
        fn new() -> Self {
            Self(Rc::new(Cell::new(
                Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap(),
            )))
        }

        fn advance(&self, by: Duration) {
            self.0.set(self.0.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            self.0.get()
        }
    }

    fn controller() -> (AssessmentController<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let controller = AssessmentController::with_clock(
            QuestionBank::builtin(),
            AssessmentConfig::default(),
            clock.clone(),
        );
        (controller, clock)
    }

    /// Answer every question, the first `correct` of them correctly.
    fn answer_all(controller: &mut AssessmentController<ManualClock>, correct: usize) {
        let keys: Vec<usize> = controller
            .bank()
            .questions()
            .iter()
            .map(|q| q.correct_answer)
            .collect();
        controller.go_to(0).unwrap();
        for (index, key) in keys.into_iter().enumerate() {
            let option = if index < correct { key } else { (key + 1) % 4 };
            controller.select_answer(option).unwrap();
            controller.next().unwrap();
        }
    }

    #[test]
    fn test_start_requires_name() {
        let (mut controller, _) = controller();

        let err = controller.start("").unwrap_err();
        assert!(matches!(err, AssessmentError::Validation(_)));
        assert!(matches!(
            controller.start("   \t").unwrap_err(),
            AssessmentError::Validation(_)
        ));
        assert_eq!(controller.phase(), Phase::NotStarted);
    }

    #[test]
    fn test_start_enters_first_question() {
        let (mut controller, _) = controller();
        controller.start("  Jane Doe ").unwrap();

        assert_eq!(controller.phase(), Phase::InProgress);
        assert_eq!(controller.name(), Some("Jane Doe"));
        assert_eq!(controller.cursor(), Some(0));
        assert_eq!(controller.answered_count(), 0);
        assert_eq!(controller.progress_percent(), 4);
        assert_eq!(controller.current_question().unwrap().id, 1);
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let (mut controller, _) = controller();
        controller.start("Jane").unwrap();
        controller.select_answer(1).unwrap();

        let err = controller.start("John").unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidPhase { .. }));
        assert_eq!(controller.name(), Some("Jane"));
        assert_eq!(controller.answered_count(), 1);
    }

    #[test]
    fn test_operations_require_in_progress() {
        let (mut controller, _) = controller();

        for err in [
            controller.select_answer(0).unwrap_err(),
            controller.next().unwrap_err(),
            controller.previous().unwrap_err(),
            controller.submit().unwrap_err(),
        ] {
            assert!(matches!(
                err,
                AssessmentError::InvalidPhase {
                    phase: Phase::NotStarted,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_navigation_clamps_at_boundaries() {
        let (mut controller, _) = controller();
        controller.start("Jane").unwrap();

        controller.previous().unwrap();
        assert_eq!(controller.cursor(), Some(0));

        for _ in 0..40 {
            controller.next().unwrap();
        }
        assert_eq!(controller.cursor(), Some(24));
        assert_eq!(controller.progress_percent(), 100);

        controller.go_to(99).unwrap();
        assert_eq!(controller.cursor(), Some(24));
        controller.go_to(3).unwrap();
        assert_eq!(controller.cursor(), Some(3));
    }

    #[test]
    fn test_select_answer_validates_option() {
        let (mut controller, _) = controller();
        controller.start("Jane").unwrap();

        let err = controller.select_answer(4).unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::OptionOutOfRange {
                option: 4,
                options: 4
            }
        ));
        assert_eq!(controller.answered_count(), 0);
    }

    #[test]
    fn test_reselecting_overwrites() {
        let (mut controller, _) = controller();
        controller.start("Jane").unwrap();

        answer_all(&mut controller, 25);
        controller.go_to(0).unwrap();
        controller.select_answer(3).unwrap();
        controller.select_answer(0).unwrap();
        assert_eq!(controller.answered_count(), 25);
        assert_eq!(controller.answers().unwrap().get(0), Some(0));

        let result = controller.submit().unwrap();
        assert_eq!(result.correct_count, 24);
        assert_eq!(result.percentage, 96);
    }

    #[test]
    fn test_submit_rejects_incomplete() {
        let (mut controller, _) = controller();
        controller.start("Jane").unwrap();
        for _ in 0..24 {
            controller.select_answer(1).unwrap();
            controller.next().unwrap();
        }

        match controller.submit().unwrap_err() {
            AssessmentError::IncompleteAssessment {
                answered,
                total,
                unanswered,
            } => {
                assert_eq!((answered, total), (24, 25));
                assert_eq!(unanswered, vec![24]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(controller.phase(), Phase::InProgress);
    }

    #[test]
    fn test_submit_scores_and_times() {
        let (mut controller, clock) = controller();
        controller.start("Jane").unwrap();
        answer_all(&mut controller, 20);
        clock.advance(Duration::seconds(37 * 60 + 40));

        let result = controller.submit().unwrap();
        assert_eq!(result.percentage, 80);
        assert!(result.passed);
        assert_eq!(result.elapsed_minutes, 38);
        assert_eq!(controller.phase(), Phase::Completed);
        assert_eq!(controller.result(), Some(&result));
        assert_eq!(controller.cursor(), None);

        let breakdown = controller.category_breakdown().unwrap();
        let correct: usize = breakdown.iter().map(|s| s.correct).sum();
        assert_eq!(correct, 20);
        assert_eq!(controller.review().unwrap().len(), 25);
    }

    #[test]
    fn test_pass_threshold_is_configurable() {
        let clock = ManualClock::new();
        let mut controller = AssessmentController::with_clock(
            QuestionBank::builtin(),
            AssessmentConfig::default().with_pass_threshold(70),
            clock,
        );
        controller.start("Jane").unwrap();
        answer_all(&mut controller, 18);

        let result = controller.submit().unwrap();
        assert_eq!(result.percentage, 72);
        assert!(result.passed);
    }

    #[test]
    fn test_reset_clears_everything() {
        let (mut controller, _) = controller();
        controller.start("Jane").unwrap();
        answer_all(&mut controller, 25);
        controller.submit().unwrap();

        controller.reset();
        assert_eq!(controller.phase(), Phase::NotStarted);
        assert!(controller.result().is_none());
        assert!(controller.answers().is_none());
        assert_eq!(controller.unanswered().len(), 25);

        controller.start("John").unwrap();
        assert_eq!(controller.name(), Some("John"));
        assert_eq!(controller.answered_count(), 0);
        assert_eq!(controller.cursor(), Some(0));
    }

    #[test]
    fn test_certificate_requires_passing_result() {
        let (mut controller, _) = controller();
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        assert!(matches!(
            controller.certificate(date).unwrap_err(),
            AssessmentError::Precondition(_)
        ));

        controller.start("Jane Doe").unwrap();
        answer_all(&mut controller, 19);
        controller.submit().unwrap();
        assert!(matches!(
            controller.certificate(date).unwrap_err(),
            AssessmentError::Precondition(_)
        ));

        controller.reset();
        controller.start("Jane Doe").unwrap();
        answer_all(&mut controller, 25);
        controller.submit().unwrap();
        let certificate = controller.certificate(date).unwrap();
        assert_eq!(
            certificate.filename(),
            "Jane_Doe_Adware_Assessment_Certificate.png"
        );
    }
}
