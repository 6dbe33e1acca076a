//! # quiz-app
//!
//! A multiple-choice quiz: questions are presented one at a time, each
//! answer is scored, and the attempt ends with a percent score that can be
//! retaken.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_app::{load_into, QuizError, QuizRepository, QuizSession, DEFAULT_QUIZ_NAME};
//!
//! fn main() -> Result<(), QuizError> {
//!     let mut repository = QuizRepository::new();
//!     load_into(&mut repository, DEFAULT_QUIZ_NAME, "quizzes/android_quiz.json")?;
//!
//!     let mut session = QuizSession::new(repository.require(DEFAULT_QUIZ_NAME)?);
//!     while session.has_next() {
//!         let question = session.next_question()?;
//!         println!("{}", question.prompt());
//!         let outcome = session.submit_answer("a")?;
//!         println!("correct: {} ({})", outcome.correct, outcome.correct_key);
//!     }
//!     println!("score: {}%", session.score_percent());
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod error;
mod models;
mod repository;
mod session;
pub mod terminal;
mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Screen};
pub use data::{load_into, load_quiz_from_json, parse_quiz, LoadError};
pub use error::QuizError;
pub use models::{Question, Quiz};
pub use repository::{QuizRepository, DEFAULT_QUIZ_NAME};
pub use session::{AnswerOutcome, QuizSession};

/// Run `session` in the terminal until the user quits.
///
/// This takes over the terminal and restores it on return.
pub fn run(session: QuizSession) -> Result<(), QuizError> {
    let mut app = App::new(session)?;
    let mut term = terminal::TerminalSession::enter()?;
    run_event_loop(term.terminal(), &mut app)
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code)? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> Result<bool, QuizError> {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Ok(true);
    }

    match app.screen {
        Screen::Question => handle_question_input(app, key)?,
        Screen::Feedback { .. } => handle_feedback_input(app, key)?,
        Screen::Result => handle_result_input(app, key)?,
    }
    Ok(false)
}

fn handle_question_input(app: &mut App, key: KeyCode) -> Result<(), QuizError> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer()?,
        _ => {}
    }
    Ok(())
}

fn handle_feedback_input(app: &mut App, key: KeyCode) -> Result<(), QuizError> {
    if matches!(key, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n')) {
        app.next()?;
    }
    Ok(())
}

fn handle_result_input(app: &mut App, key: KeyCode) -> Result<(), QuizError> {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.retry()?,
        _ => {}
    }
    Ok(())
}
