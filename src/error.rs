//! Error types for quiz operations.

use thiserror::Error;

use crate::data::LoadError;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// No quiz is registered under the requested name.
    #[error("Quiz not found: {0}")]
    NotFound(String),

    /// A question index outside `[0, count)`.
    #[error("Question index {index} out of range for quiz of {count} questions")]
    OutOfRange { index: usize, count: usize },

    /// `next_question` called with no questions left.
    #[error("Quiz session has no more questions")]
    Exhausted,

    /// An operation called in a state that does not allow it.
    #[error("Illegal session state: {0}")]
    IllegalState(&'static str),

    /// A question whose correct key is not one of its answers.
    #[error("Invalid question {prompt:?}: correct answer {answer_key:?} is not an answer key")]
    InvalidQuestion { prompt: String, answer_key: String },

    /// Error loading a quiz from a file.
    #[error("Failed to load quiz: {0}")]
    Load(#[from] LoadError),

    /// IO error while running the terminal UI.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
