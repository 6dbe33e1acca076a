//! Named registry of loaded quizzes.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::QuizError;
use crate::models::Quiz;

/// Name the bundled quiz is registered under.
pub const DEFAULT_QUIZ_NAME: &str = "Android Quiz";

/// Registry of quizzes keyed by name.
///
/// Populated once at startup and passed to whatever builds sessions.
/// Quizzes are handed out as shared, immutable `Arc<Quiz>` values.
#[derive(Debug, Default)]
pub struct QuizRepository {
    quizzes: HashMap<String, Arc<Quiz>>,
}

impl QuizRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `quiz` under `name`, replacing any quiz already there.
    pub fn register(&mut self, name: impl Into<String>, quiz: Quiz) -> Arc<Quiz> {
        let name = name.into();
        let quiz = Arc::new(quiz);
        log::debug!(
            "Registered quiz {:?} with {} questions",
            name,
            quiz.question_count()
        );
        if self.quizzes.insert(name.clone(), Arc::clone(&quiz)).is_some() {
            log::debug!("Replaced existing quiz {:?}", name);
        }
        quiz
    }

    /// Get the quiz registered under `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<Arc<Quiz>> {
        self.quizzes.get(name).cloned()
    }

    /// Like [`lookup`](Self::lookup), but a missing quiz is a [`QuizError::NotFound`].
    pub fn require(&self, name: &str) -> Result<Arc<Quiz>, QuizError> {
        self.lookup(name)
            .ok_or_else(|| QuizError::NotFound(name.to_string()))
    }

    /// Registered quiz names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.quizzes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::models::Question;

    fn quiz_with(prompt: &str) -> Quiz {
        let mut options = IndexMap::new();
        options.insert("a".to_string(), "yes".to_string());
        options.insert("b".to_string(), "no".to_string());
        Quiz::new(vec![Question::new(prompt, "a", options).unwrap()])
    }

    #[test]
    fn test_lookup_missing() {
        let repo = QuizRepository::new();
        assert!(repo.is_empty());
        assert!(repo.lookup(DEFAULT_QUIZ_NAME).is_none());
        assert!(matches!(
            repo.require("nope"),
            Err(QuizError::NotFound(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_register_and_lookup() {
        let mut repo = QuizRepository::new();
        let registered = repo.register(DEFAULT_QUIZ_NAME, quiz_with("first"));

        let found = repo.lookup(DEFAULT_QUIZ_NAME).unwrap();
        assert!(Arc::ptr_eq(&registered, &found));
        assert_eq!(found.question_at(0).unwrap().prompt(), "first");
        assert!(repo.require(DEFAULT_QUIZ_NAME).is_ok());
    }

    #[test]
    fn test_register_overwrites() {
        let mut repo = QuizRepository::new();
        let old = repo.register("quiz", quiz_with("first"));
        repo.register("quiz", quiz_with("second"));
        repo.register("other", quiz_with("third"));

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.names(), ["other", "quiz"]);
        let current = repo.lookup("quiz").unwrap();
        assert_eq!(current.question_at(0).unwrap().prompt(), "second");
        // Earlier holders keep the quiz they were given.
        assert_eq!(old.question_at(0).unwrap().prompt(), "first");
    }
}
