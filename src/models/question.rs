use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// A single multiple-choice question.
///
/// `options` keeps the answers in the order they were provided, which is
/// the order they are presented in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    prompt: String,
    answer_key: String,
    options: IndexMap<String, String>,
}

/// On-disk shape of a question.
#[derive(Serialize, Deserialize)]
struct QuestionRecord {
    question: String,
    correct_answer: String,
    answers: IndexMap<String, String>,
}

impl Question {
    /// Create a question, checking that `answer_key` is one of the `options` keys.
    pub fn new(
        prompt: impl Into<String>,
        answer_key: impl Into<String>,
        options: IndexMap<String, String>,
    ) -> Result<Self, QuizError> {
        let prompt = prompt.into();
        let answer_key = answer_key.into();

        if !options.contains_key(&answer_key) {
            return Err(QuizError::InvalidQuestion { prompt, answer_key });
        }

        Ok(Self {
            prompt,
            answer_key,
            options,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The key of the correct option.
    pub fn answer_key(&self) -> &str {
        &self.answer_key
    }

    pub fn options(&self) -> &IndexMap<String, String> {
        &self.options
    }

    /// Text of the option stored under `key`.
    pub fn option_text(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// `true` if `proposed_key` is the correct key.
    ///
    /// Any string is accepted; keys that are not options are simply wrong.
    pub fn check_answer(&self, proposed_key: &str) -> bool {
        self.answer_key == proposed_key
    }
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuizError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(record.question, record.correct_answer, record.answers)
    }
}

impl From<Question> for QuestionRecord {
    fn from(question: Question) -> Self {
        Self {
            question: question.prompt,
            correct_answer: question.answer_key,
            answers: question.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sample() -> Question {
        Question::new(
            "This is question 1",
            "b",
            options(&[
                ("a", "not the answer"),
                ("b", "the answer"),
                ("c", "also not the answer"),
                ("d", "again, not the answer"),
            ]),
        )
        .unwrap()
    }

    #[test]
    fn test_check_answer_correct() {
        assert!(sample().check_answer("b"));
    }

    #[test]
    fn test_check_answer_incorrect() {
        let question = sample();
        assert!(!question.check_answer("a"));
        assert!(!question.check_answer("d"));
        assert!(!question.check_answer("x")); // not an option
        assert!(!question.check_answer(""));
        assert!(!question.check_answer("B"));
    }

    #[test]
    fn test_new_rejects_missing_answer_key() {
        let err = Question::new("q", "z", options(&[("a", "1"), ("b", "2")])).unwrap_err();
        assert!(matches!(err, QuizError::InvalidQuestion { ref answer_key, .. } if answer_key == "z"));
    }

    #[test]
    fn test_options_keep_insertion_order() {
        let question = Question::new(
            "q",
            "a",
            options(&[("d", "4"), ("a", "1"), ("c", "3"), ("b", "2")]),
        )
        .unwrap();

        let keys: Vec<&str> = question.options().keys().map(String::as_str).collect();
        assert_eq!(keys, ["d", "a", "c", "b"]);
        let again: Vec<&str> = question.options().keys().map(String::as_str).collect();
        assert_eq!(keys, again);
    }

    #[test]
    fn test_deserialize_preserves_order() {
        let json = r#"{
            "question": "Pick one",
            "correct_answer": "c",
            "answers": { "z": "last letter", "c": "third", "m": "middle" }
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();

        assert_eq!(question.prompt(), "Pick one");
        assert_eq!(question.answer_key(), "c");
        assert_eq!(question.option_text("m"), Some("middle"));
        let keys: Vec<&str> = question.options().keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "c", "m"]);
    }

    #[test]
    fn test_deserialize_rejects_unknown_correct_answer() {
        let json = r#"{"question": "q", "correct_answer": "x", "answers": {"a": "1"}}"#;
        let result: Result<Question, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
