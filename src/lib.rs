//! # adware-assessment
//!
//! A scored, single-user knowledge assessment on adware with a certificate of
//! completion for passing attempts.
//!
//! The library is usable without a terminal: [`AssessmentController`] drives a
//! session and [`Certificate`] renders the PNG. [`Trainer`] wraps both in a
//! ratatui front end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use adware_assessment::{AssessmentConfig, Trainer, TrainerError};
//!
//! fn main() -> Result<(), TrainerError> {
//!     let trainer = Trainer::from_json("questions.json", AssessmentConfig::default())?;
//!     trainer.with_output_dir("certificates").run()
//! }
//! ```

mod app;
pub mod certificate;
mod config;
mod controller;
mod data;
mod error;
mod models;
pub mod scoring;
pub mod terminal;
mod ui;

use std::io;
use std::path::{Path, PathBuf};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::{App, Notice};
pub use certificate::{Certificate, CertificateRequest};
pub use config::{AssessmentConfig, DEFAULT_PASS_THRESHOLD};
pub use controller::{AssessmentController, Clock, SystemClock};
pub use data::{LoadError, QuestionBank, load_questions_from_json};
pub use error::{AssessmentError, Result};
pub use models::{
    AnswerRecord, AssessmentResult, CategoryCount, CategoryScore, OPTIONS_PER_QUESTION, Phase,
    Question, QuestionReview,
};

/// Errors surfaced by the terminal trainer.
#[derive(Debug, Error)]
pub enum TrainerError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}

/// The assessment running in a terminal.
pub struct Trainer {
    app: App,
}

impl Trainer {
    pub fn new(bank: QuestionBank, config: AssessmentConfig) -> Self {
        Self {
            app: App::new(bank, config),
        }
    }

    /// Load the question bank from a JSON file.
    ///
    /// ```rust,no_run
    /// use adware_assessment::{AssessmentConfig, Trainer};
    ///
    /// let trainer = Trainer::from_json("questions.json", AssessmentConfig::default())
    ///     .expect("questions should load");
    /// ```
    pub fn from_json<P: AsRef<Path>>(
        path: P,
        config: AssessmentConfig,
    ) -> std::result::Result<Self, TrainerError> {
        let bank = load_questions_from_json(path)?;
        Ok(Self::new(bank, config))
    }

    /// Directory certificates are written to. Defaults to the working directory.
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.app = self.app.with_output_dir(output_dir);
        self
    }

    /// Take over the terminal until the user quits.
    pub fn run(mut self) -> std::result::Result<(), TrainerError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(QuestionBank::builtin(), AssessmentConfig::default())
    }
}

fn run_event_loop(
    terminal: &mut terminal::TrainerTerminal,
    app: &mut App,
) -> std::result::Result<(), TrainerError> {
    tracing::info!(questions = app.controller().total_questions(), "trainer started");
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }
    tracing::info!("trainer closed");
    Ok(())
}

/// Returns true if the trainer should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.phase() {
        Phase::NotStarted => handle_welcome_input(app, key),
        Phase::InProgress => handle_quiz_input(app, key),
        Phase::Completed => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => app.start_assessment(),
        KeyCode::Backspace => app.name_input_pop(),
        KeyCode::Char(c) => app.name_input_push(c),
        KeyCode::Esc => return true,
        _ => {}
    }
    false
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.highlight_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.highlight_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_highlighted(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_question(),
        KeyCode::Right | KeyCode::Char('l') => app.next_question(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.submit(),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.export_certificate(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}
