//! A single attempt at a quiz.
//!
//! [`QuizSession::next_question`] presents a question and advances the
//! cursor; [`QuizSession::submit_answer`] then scores that question. The
//! question being scored is always the one at `cursor - 1`.

use std::fmt;
use std::sync::Arc;

use crate::error::QuizError;
use crate::models::{Question, Quiz};

/// Result of scoring one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the proposed key was the correct one.
    pub correct: bool,
    /// The correct key, for feedback.
    pub correct_key: String,
}

type CompletionListener = Box<dyn FnMut(bool)>;

/// State machine for one user's attempt at a [`Quiz`].
pub struct QuizSession {
    quiz: Arc<Quiz>,
    /// Index of the next question to present.
    cursor: usize,
    /// One entry per question, `true` when answered correctly.
    scoreboard: Vec<bool>,
    /// Set between `next_question` and the matching `submit_answer`.
    awaiting_answer: bool,
    completed: bool,
    listeners: Vec<CompletionListener>,
}

impl QuizSession {
    /// Start a session over `quiz`.
    ///
    /// A quiz with no questions starts out complete.
    pub fn new(quiz: Arc<Quiz>) -> Self {
        let count = quiz.question_count();
        Self {
            quiz,
            cursor: 0,
            scoreboard: vec![false; count],
            awaiting_answer: false,
            completed: count == 0,
            listeners: Vec::new(),
        }
    }

    pub fn quiz(&self) -> &Arc<Quiz> {
        &self.quiz
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scoreboard(&self) -> &[bool] {
        &self.scoreboard
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// `true` while there are questions left to present.
    pub fn has_next(&self) -> bool {
        self.cursor < self.quiz.question_count()
    }

    /// Present the next question and advance the cursor.
    ///
    /// Presenting a new question before answering the previous one leaves
    /// the previous one scored as incorrect.
    pub fn next_question(&mut self) -> Result<&Question, QuizError> {
        if !self.has_next() {
            log::error!(
                "Attempted to get another question but all {} have been presented",
                self.quiz.question_count()
            );
            return Err(QuizError::Exhausted);
        }

        let index = self.cursor;
        self.cursor += 1;
        self.awaiting_answer = true;
        self.quiz.question_at(index)
    }

    /// The presented question still waiting for an answer.
    pub fn current_question(&self) -> Option<&Question> {
        if self.awaiting_answer {
            self.quiz.question_at(self.cursor - 1).ok()
        } else {
            None
        }
    }

    /// Score `proposed_key` against the current question.
    ///
    /// Fails with [`QuizError::IllegalState`] once the session is complete,
    /// or when no question has been presented since the last answer.
    pub fn submit_answer(&mut self, proposed_key: &str) -> Result<AnswerOutcome, QuizError> {
        if self.completed {
            log::error!("Attempted to answer a question but the quiz is complete");
            return Err(QuizError::IllegalState(
                "all questions have been answered",
            ));
        }
        if !self.awaiting_answer {
            log::error!(
                "Attempted to answer a question before presenting one (cursor {})",
                self.cursor
            );
            return Err(QuizError::IllegalState("no question is awaiting an answer"));
        }

        let index = self.cursor - 1;
        let question = self.quiz.question_at(index)?;
        let outcome = AnswerOutcome {
            correct: question.check_answer(proposed_key),
            correct_key: question.answer_key().to_string(),
        };

        self.scoreboard[index] = outcome.correct;
        self.awaiting_answer = false;
        if !self.has_next() {
            self.set_completed(true);
        }

        Ok(outcome)
    }

    /// Number of questions answered correctly so far.
    pub fn correct_count(&self) -> usize {
        self.scoreboard.iter().filter(|correct| **correct).count()
    }

    /// Percent correct, truncated. Zero for a quiz with no questions.
    pub fn score_percent(&self) -> usize {
        match self.quiz.question_count() {
            0 => 0,
            count => self.correct_count() * 100 / count,
        }
    }

    /// Return to the first question with an empty scoreboard.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.scoreboard.fill(false);
        self.awaiting_answer = false;
        self.set_completed(self.quiz.is_empty());
    }

    /// Register a callback run whenever the completed flag changes.
    ///
    /// Callbacks run synchronously, before the mutating call returns.
    pub fn on_completion_change(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn set_completed(&mut self, completed: bool) {
        if self.completed == completed {
            return;
        }
        self.completed = completed;
        for listener in &mut self.listeners {
            listener(completed);
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("cursor", &self.cursor)
            .field("scoreboard", &self.scoreboard)
            .field("awaiting_answer", &self.awaiting_answer)
            .field("completed", &self.completed)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
