use std::path::{Path, PathBuf};

use crate::config::AssessmentConfig;
use crate::controller::AssessmentController;
use crate::data::QuestionBank;
use crate::error::AssessmentError;
use crate::models::{Phase, OPTIONS_PER_QUESTION};

const NAME_MAX_LENGTH: usize = 48;
/// Rough upper bound of review lines per question on the result screen.
const REVIEW_LINES_PER_QUESTION: usize = 5;

/// One-line feedback shown under the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Terminal front end state wrapped around an [`AssessmentController`].
pub struct App {
    controller: AssessmentController,
    name_input: String,
    highlighted_option: usize,
    result_scroll: usize,
    notice: Option<Notice>,
    output_dir: PathBuf,
}

impl App {
    pub fn new(bank: QuestionBank, config: AssessmentConfig) -> Self {
        Self {
            controller: AssessmentController::new(bank, config),
            name_input: String::new(),
            highlighted_option: 0,
            result_scroll: 0,
            notice: None,
            output_dir: PathBuf::from("."),
        }
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn controller(&self) -> &AssessmentController {
        &self.controller
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn highlighted_option(&self) -> usize {
        self.highlighted_option
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn name_input_push(&mut self, c: char) {
        if self.name_input.chars().count() < NAME_MAX_LENGTH {
            self.name_input.push(c);
        }
        self.notice = None;
    }

    pub fn name_input_pop(&mut self) {
        self.name_input.pop();
    }

    pub fn start_assessment(&mut self) {
        match self.controller.start(&self.name_input) {
            Ok(()) => {
                self.notice = None;
                self.sync_highlight();
            }
            Err(err) => self.notice = Some(Notice::Error(err.to_string())),
        }
    }

    pub fn highlight_next_option(&mut self) {
        self.highlighted_option = (self.highlighted_option + 1) % OPTIONS_PER_QUESTION;
    }

    pub fn highlight_previous_option(&mut self) {
        self.highlighted_option =
            (self.highlighted_option + OPTIONS_PER_QUESTION - 1) % OPTIONS_PER_QUESTION;
    }

    /// Record the highlighted option and advance to the next question.
    pub fn select_highlighted(&mut self) {
        if let Err(err) = self.controller.select_answer(self.highlighted_option) {
            self.notice = Some(Notice::Error(err.to_string()));
            return;
        }
        self.notice = None;
        self.next_question();
    }

    pub fn next_question(&mut self) {
        if self.controller.next().is_ok() {
            self.sync_highlight();
        }
    }

    pub fn previous_question(&mut self) {
        if self.controller.previous().is_ok() {
            self.sync_highlight();
        }
    }

    pub fn submit(&mut self) {
        match self.controller.submit() {
            Ok(_) => {
                self.result_scroll = 0;
                self.notice = None;
            }
            Err(AssessmentError::IncompleteAssessment { unanswered, .. }) => {
                if let Some(&first) = unanswered.first() {
                    let _ = self.controller.go_to(first);
                    self.sync_highlight();
                }
                self.notice = Some(Notice::Error(format!(
                    "Please answer all questions before submitting ({} remaining)",
                    unanswered.len()
                )));
            }
            Err(err) => self.notice = Some(Notice::Error(err.to_string())),
        }
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.controller.total_questions() * REVIEW_LINES_PER_QUESTION;
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Render today's certificate and write it to the output directory.
    pub fn export_certificate(&mut self) {
        let saved = self
            .controller
            .certificate_today()
            .and_then(|certificate| certificate.save(&self.output_dir));

        self.notice = Some(match saved {
            Ok(path) => Notice::Info(format!("Certificate saved to {}", path.display())),
            Err(err) => Notice::Error(err.to_string()),
        });
    }

    pub fn restart(&mut self) {
        self.controller.reset();
        self.highlighted_option = 0;
        self.result_scroll = 0;
        self.notice = None;
    }

    /// Put the highlight on the stored answer for the current question, if any.
    fn sync_highlight(&mut self) {
        self.highlighted_option = self
            .controller
            .cursor()
            .and_then(|cursor| self.controller.answers()?.get(cursor))
            .unwrap_or(0);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(QuestionBank::builtin(), AssessmentConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_app() -> App {
        let mut app = App::default();
        for c in "Jane Doe".chars() {
            app.name_input_push(c);
        }
        app.start_assessment();
        app
    }

    #[test]
    fn test_blank_name_shows_error() {
        let mut app = App::default();
        app.name_input_push(' ');
        app.start_assessment();

        assert_eq!(app.phase(), Phase::NotStarted);
        assert!(matches!(app.notice(), Some(Notice::Error(_))));
    }

    #[test]
    fn test_highlight_wraps() {
        let mut app = started_app();
        app.highlight_previous_option();
        assert_eq!(app.highlighted_option(), 3);
        app.highlight_next_option();
        assert_eq!(app.highlighted_option(), 0);
    }

    #[test]
    fn test_select_advances_and_restores_highlight() {
        let mut app = started_app();
        app.highlight_next_option();
        app.highlight_next_option();
        app.select_highlighted();

        assert_eq!(app.controller().cursor(), Some(1));
        assert_eq!(app.highlighted_option(), 0);

        app.previous_question();
        assert_eq!(app.highlighted_option(), 2);
    }

    #[test]
    fn test_incomplete_submit_jumps_to_first_gap() {
        let mut app = started_app();
        app.select_highlighted();
        app.select_highlighted();
        app.submit();

        assert_eq!(app.phase(), Phase::InProgress);
        assert_eq!(app.controller().cursor(), Some(2));
        assert_eq!(
            app.notice(),
            Some(&Notice::Error(
                "Please answer all questions before submitting (23 remaining)".to_string()
            ))
        );
    }

    #[test]
    fn test_full_run_and_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = started_app().with_output_dir(dir.path());

        let keys: Vec<usize> = app
            .controller()
            .bank()
            .questions()
            .iter()
            .map(|q| q.correct_answer)
            .collect();
        for key in keys {
            while app.highlighted_option() != key {
                app.highlight_next_option();
            }
            app.select_highlighted();
        }
        app.submit();
        assert_eq!(app.phase(), Phase::Completed);

        app.export_certificate();
        assert!(matches!(app.notice(), Some(Notice::Info(_))));
        assert!(
            dir.path()
                .join("Jane_Doe_Adware_Assessment_Certificate.png")
                .exists()
        );

        app.restart();
        assert_eq!(app.phase(), Phase::NotStarted);
        assert!(app.notice().is_none());
    }
}
