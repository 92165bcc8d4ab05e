use eco_core::catalog;
use eco_core::model::{ImpactValue, Question};
use eco_core::scoring::{self, QuizScore};

use crate::error::QuizError;

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// In-memory wizard over the fixed question list.
///
/// Steps linearly through the questions, recording one value per question
/// (0 = unanswered). Navigation saturates at both ends; the session never
/// fails except when a value not offered by the current question is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: &'static [Question],
    answers: Vec<ImpactValue>,
    current: usize,
}

impl QuizSession {
    /// Starts a fresh session over the survey catalog, nothing answered.
    #[must_use]
    pub fn new() -> Self {
        let questions = catalog::questions();
        Self {
            questions,
            answers: vec![0; questions.len()],
            current: 0,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &'static Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// The value selected for the current question, if any.
    #[must_use]
    pub fn selected_value(&self) -> Option<ImpactValue> {
        match self.answers[self.current] {
            0 => None,
            value => Some(value),
        }
    }

    /// Records the answer for the current question, replacing any prior pick.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::ValueNotOffered` if the current question has no
    /// option with that value.
    pub fn select(&mut self, value: ImpactValue) -> Result<(), QuizError> {
        if !self.current_question().has_option(value) {
            return Err(QuizError::ValueNotOffered { value });
        }
        self.answers[self.current] = value;
        Ok(())
    }

    /// Moves to the next question; saturates at the last one.
    pub fn next(&mut self) {
        if !self.is_last() {
            self.current += 1;
        }
    }

    /// Moves to the previous question; saturates at the first one.
    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// The raw answer sequence, index-aligned to the question list.
    #[must_use]
    pub fn answers(&self) -> &[ImpactValue] {
        &self.answers
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.questions.len();
        let answered = self.answers.iter().filter(|&&value| value != 0).count();
        QuizProgress {
            total,
            answered,
            remaining: total - answered,
            is_complete: answered == total,
        }
    }

    /// Scores the answers as they stand; unanswered questions lower the
    /// percentage but never fail.
    #[must_use]
    pub fn score(&self) -> QuizScore {
        scoring::score_answers(self.questions, &self.answers)
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
