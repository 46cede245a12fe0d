use std::cell::Cell;
use std::rc::Rc;

use adware_assessment::{
    AssessmentConfig, AssessmentController, AssessmentError, Clock, Phase, QuestionBank,
};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

#[derive(Clone)]
struct StepClock(Rc<Cell<DateTime<Utc>>>);

impl StepClock {
    fn new() -> Self {
        Self(Rc::new(Cell::new(
            Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap(),
        )))
    }

    fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.get()
    }
}

fn controller() -> (AssessmentController<StepClock>, StepClock) {
    let clock = StepClock::new();
    let controller = AssessmentController::with_clock(
        QuestionBank::builtin(),
        AssessmentConfig::default(),
        clock.clone(),
    );
    (controller, clock)
}

fn correct_answers(controller: &AssessmentController<StepClock>) -> Vec<usize> {
    controller
        .bank()
        .questions()
        .iter()
        .map(|q| q.correct_answer)
        .collect()
}

/// Answer every question, getting the first `wrong` of them wrong.
fn answer_all(controller: &mut AssessmentController<StepClock>, wrong: usize) {
    for (index, correct) in correct_answers(controller).into_iter().enumerate() {
        controller.go_to(index).unwrap();
        let option = if index < wrong {
            (correct + 1) % 4
        } else {
            correct
        };
        controller.select_answer(option).unwrap();
    }
}

#[test]
fn perfect_run_earns_certificate() {
    let (mut controller, clock) = controller();
    controller.start("Jane Doe").unwrap();
    answer_all(&mut controller, 0);
    clock.advance(Duration::minutes(12));

    let result = controller.submit().unwrap();
    assert_eq!(result.correct_count, 25);
    assert_eq!(result.percentage, 100);
    assert!(result.passed);
    assert_eq!(result.elapsed_minutes, 12);
    assert_eq!(controller.phase(), Phase::Completed);

    let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let certificate = controller.certificate(date).unwrap();
    assert_eq!(certificate.image().dimensions(), (1200, 800));
    assert_eq!(
        certificate.filename(),
        "Jane_Doe_Adware_Assessment_Certificate.png"
    );
}

#[test]
fn blank_name_is_rejected() {
    let (mut controller, _) = controller();
    let err = controller.start("").unwrap_err();
    assert!(matches!(err, AssessmentError::Validation(_)));
    assert_eq!(controller.phase(), Phase::NotStarted);

    let err = controller.start("   \t").unwrap_err();
    assert!(matches!(err, AssessmentError::Validation(_)));
}

#[test]
fn pass_boundary_at_eighty_percent() {
    let (mut controller, _) = controller();
    controller.start("Jane Doe").unwrap();
    answer_all(&mut controller, 5);
    let result = controller.submit().unwrap();
    assert_eq!(result.correct_count, 20);
    assert_eq!(result.percentage, 80);
    assert!(result.passed);

    controller.reset();
    controller.start("Jane Doe").unwrap();
    answer_all(&mut controller, 6);
    let result = controller.submit().unwrap();
    assert_eq!(result.correct_count, 19);
    assert_eq!(result.percentage, 76);
    assert!(!result.passed);

    let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let err = controller.certificate(date).unwrap_err();
    assert!(matches!(err, AssessmentError::Precondition(_)));
}

#[test]
fn incomplete_submission_keeps_session() {
    let (mut controller, _) = controller();
    controller.start("Jane Doe").unwrap();
    controller.select_answer(0).unwrap();
    controller.go_to(3).unwrap();
    controller.select_answer(2).unwrap();

    match controller.submit() {
        Err(AssessmentError::IncompleteAssessment {
            answered,
            total,
            unanswered,
        }) => {
            assert_eq!(answered, 2);
            assert_eq!(total, 25);
            assert_eq!(unanswered.len(), 23);
            assert_eq!(&unanswered[..3], &[1, 2, 4]);
        }
        other => panic!("expected incomplete submission, got {:?}", other),
    }
    assert_eq!(controller.phase(), Phase::InProgress);
    assert_eq!(controller.answered_count(), 2);
    assert_eq!(controller.cursor(), Some(3));
}

#[test]
fn changing_an_answer_overwrites_it() {
    let (mut controller, _) = controller();
    controller.start("Jane Doe").unwrap();
    controller.select_answer(1).unwrap();
    controller.select_answer(3).unwrap();

    let answers = controller.answers().unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers.get(0), Some(3));
}

#[test]
fn reset_starts_over() {
    let (mut controller, _) = controller();
    controller.start("Jane Doe").unwrap();
    answer_all(&mut controller, 0);
    controller.submit().unwrap();

    controller.reset();
    assert_eq!(controller.phase(), Phase::NotStarted);
    assert!(controller.result().is_none());
    assert!(controller.name().is_none());

    controller.start("John Roe").unwrap();
    assert_eq!(controller.cursor(), Some(0));
    assert_eq!(controller.answered_count(), 0);
    assert_eq!(controller.name(), Some("John Roe"));
}

#[test]
fn navigation_is_clamped_to_the_bank() {
    let (mut controller, _) = controller();
    controller.start("Jane Doe").unwrap();

    controller.previous().unwrap();
    assert_eq!(controller.cursor(), Some(0));

    controller.go_to(99).unwrap();
    assert_eq!(controller.cursor(), Some(24));
    controller.next().unwrap();
    assert_eq!(controller.cursor(), Some(24));
}

#[test]
fn category_breakdown_sums_to_total() {
    let (mut controller, _) = controller();
    controller.start("Jane Doe").unwrap();
    answer_all(&mut controller, 3);
    controller.submit().unwrap();

    let breakdown = controller.category_breakdown().unwrap();
    let total: usize = breakdown.iter().map(|c| c.total).sum();
    let correct: usize = breakdown.iter().map(|c| c.correct).sum();
    assert_eq!(total, 25);
    assert_eq!(correct, 22);

    let review = controller.review().unwrap();
    assert_eq!(review.len(), 25);
    assert_eq!(review.iter().filter(|r| !r.is_correct).count(), 3);
}
