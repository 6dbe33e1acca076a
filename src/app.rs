use crate::error::QuizError;
use crate::models::Question;
use crate::session::{AnswerOutcome, QuizSession};

/// Which screen the presentation layer shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// A question waiting for an answer.
    Question,
    /// The answered question with right/wrong feedback.
    Feedback {
        chosen_key: String,
        outcome: AnswerOutcome,
    },
    /// Final score and per-question breakdown.
    Result,
}

/// Presentation state on top of a [`QuizSession`].
pub struct App {
    pub screen: Screen,
    session: QuizSession,
    selected_option: usize,
    /// Chosen key per question, for the results breakdown.
    chosen_keys: Vec<Option<String>>,
    result_scroll: usize,
}

impl App {
    /// Wrap `session` and present its first question.
    pub fn new(session: QuizSession) -> Result<Self, QuizError> {
        let num_questions = session.quiz().question_count();
        let mut app = Self {
            screen: Screen::Result,
            session,
            selected_option: 0,
            chosen_keys: vec![None; num_questions],
            result_scroll: 0,
        };
        app.session.reset();
        app.present_next()?;
        Ok(app)
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// The question on screen, answered or not.
    pub fn displayed_question(&self) -> Option<&Question> {
        match self.screen {
            Screen::Result => None,
            Screen::Question | Screen::Feedback { .. } => {
                let index = self.session.cursor().checked_sub(1)?;
                self.session.quiz().question_at(index).ok()
            }
        }
    }

    /// 1-based number of the question on screen.
    pub fn current_question_number(&self) -> usize {
        self.session.cursor()
    }

    pub fn total_questions(&self) -> usize {
        self.session.quiz().question_count()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    /// Key of the highlighted option.
    pub fn selected_key(&self) -> Option<&str> {
        self.displayed_question()?
            .options()
            .get_index(self.selected_option)
            .map(|(key, _)| key.as_str())
    }

    pub fn chosen_keys(&self) -> &[Option<String>] {
        &self.chosen_keys
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    fn option_count(&self) -> usize {
        self.displayed_question()
            .map_or(0, |question| question.options().len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if self.screen == Screen::Question && count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if self.screen == Screen::Question && count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Score the highlighted option and show feedback.
    pub fn submit_answer(&mut self) -> Result<(), QuizError> {
        if self.screen != Screen::Question {
            return Ok(());
        }
        let Some(chosen_key) = self.selected_key().map(str::to_string) else {
            return Ok(());
        };

        let outcome = self.session.submit_answer(&chosen_key)?;
        let index = self.session.cursor() - 1;
        self.chosen_keys[index] = Some(chosen_key.clone());
        self.screen = Screen::Feedback {
            chosen_key,
            outcome,
        };
        Ok(())
    }

    /// Leave the feedback screen for the next question or the results.
    pub fn next(&mut self) -> Result<(), QuizError> {
        if matches!(self.screen, Screen::Feedback { .. }) {
            self.present_next()?;
        }
        Ok(())
    }

    /// Start the quiz over.
    pub fn retry(&mut self) -> Result<(), QuizError> {
        self.session.reset();
        self.chosen_keys.fill(None);
        self.result_scroll = 0;
        self.present_next()
    }

    fn present_next(&mut self) -> Result<(), QuizError> {
        self.selected_option = 0;
        if self.session.has_next() {
            self.session.next_question()?;
            self.screen = Screen::Question;
        } else {
            self.screen = Screen::Result;
        }
        Ok(())
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.total_questions().saturating_sub(1);
        if self.result_scroll < max_scroll {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::data::parse_quiz;

    fn app() -> App {
        let quiz = parse_quiz(
            r#"{"questions": [
                {"question": "one", "correct_answer": "b", "answers": {"a": "1", "b": "2", "c": "3"}},
                {"question": "two", "correct_answer": "a", "answers": {"a": "1", "b": "2"}}
            ]}"#,
        )
        .unwrap();
        App::new(QuizSession::new(Arc::new(quiz))).unwrap()
    }

    #[test]
    fn test_starts_on_first_question() {
        let app = app();
        assert_eq!(app.screen, Screen::Question);
        assert_eq!(app.current_question_number(), 1);
        assert_eq!(app.displayed_question().unwrap().prompt(), "one");
        assert_eq!(app.selected_key(), Some("a"));
    }

    #[test]
    fn test_option_selection_wraps() {
        let mut app = app();
        app.select_previous_option();
        assert_eq!(app.selected_key(), Some("c"));
        app.select_next_option();
        app.select_next_option();
        assert_eq!(app.selected_key(), Some("b"));
    }

    #[test]
    fn test_full_run_and_retry() {
        let mut app = app();

        app.select_next_option();
        app.submit_answer().unwrap();
        assert_eq!(
            app.screen,
            Screen::Feedback {
                chosen_key: "b".to_string(),
                outcome: AnswerOutcome {
                    correct: true,
                    correct_key: "b".to_string(),
                },
            }
        );
        // Submitting again on the feedback screen does nothing.
        app.submit_answer().unwrap();

        app.next().unwrap();
        assert_eq!(app.displayed_question().unwrap().prompt(), "two");
        app.select_next_option();
        app.submit_answer().unwrap();
        app.next().unwrap();

        assert_eq!(app.screen, Screen::Result);
        assert!(app.session().is_complete());
        assert_eq!(app.session().score_percent(), 50);
        assert_eq!(
            app.chosen_keys(),
            [Some("b".to_string()), Some("b".to_string())]
        );

        app.retry().unwrap();
        assert_eq!(app.screen, Screen::Question);
        assert_eq!(app.session().correct_count(), 0);
        assert_eq!(app.chosen_keys(), [None::<String>, None]);
    }

    #[test]
    fn test_empty_quiz_shows_results() {
        let quiz = parse_quiz(r#"{"questions": []}"#).unwrap();
        let mut app = App::new(QuizSession::new(Arc::new(quiz))).unwrap();

        assert_eq!(app.screen, Screen::Result);
        assert!(app.displayed_question().is_none());
        app.retry().unwrap();
        assert_eq!(app.screen, Screen::Result);
    }
}
