use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::models::Quiz;
use crate::repository::QuizRepository;

/// Error loading a quiz file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The contents are not a valid quiz.
    #[error("Failed to parse quiz: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a quiz from its JSON representation.
pub fn parse_quiz(json: &str) -> Result<Quiz, LoadError> {
    let quiz: Quiz = serde_json::from_str(json)?;
    if quiz.is_empty() {
        log::warn!("Loaded a quiz with no questions");
    }
    Ok(quiz)
}

/// Load a quiz from a JSON file.
pub fn load_quiz_from_json<P: AsRef<Path>>(path: P) -> Result<Quiz, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let quiz = parse_quiz(&json_content)?;
    log::info!(
        "Loaded {} questions from {}",
        quiz.question_count(),
        path.display()
    );
    Ok(quiz)
}

/// Load a quiz from `path` and register it in `repository` under `name`.
pub fn load_into<P: AsRef<Path>>(
    repository: &mut QuizRepository,
    name: &str,
    path: P,
) -> Result<Arc<Quiz>, LoadError> {
    let quiz = load_quiz_from_json(path)?;
    Ok(repository.register(name, quiz))
}
