use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog;
use crate::model::question::ImpactValue;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error("expected {expected} answers, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("answer {value} at index {index} is not offered by that question")]
    ValueNotOffered { index: usize, value: ImpactValue },
}

/// The persisted survey result: one impact value per question, index-aligned
/// to the question list, with 0 meaning "unanswered".
///
/// This is the only durable state in the system. It is written once per quiz
/// submission (full overwrite) and read by the tracker at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSnapshot {
    answers: Vec<ImpactValue>,
    taken_at: DateTime<Utc>,
}

impl AnswerSnapshot {
    /// Builds a snapshot, validating the answers against the question list.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::LengthMismatch` if the sequence length does not
    /// match the question count, or `SnapshotError::ValueNotOffered` if a
    /// non-zero value is not one of the question's options.
    pub fn new(
        answers: Vec<ImpactValue>,
        taken_at: DateTime<Utc>,
    ) -> Result<Self, SnapshotError> {
        let questions = catalog::questions();
        if answers.len() != questions.len() {
            return Err(SnapshotError::LengthMismatch {
                expected: questions.len(),
                got: answers.len(),
            });
        }
        for (index, (&value, question)) in answers.iter().zip(questions).enumerate() {
            if value != 0 && !question.has_option(value) {
                return Err(SnapshotError::ValueNotOffered { index, value });
            }
        }
        Ok(Self { answers, taken_at })
    }

    /// Rehydrates a snapshot from storage. Same validation as [`Self::new`];
    /// callers treat a failure as "no survey taken".
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError` for malformed persisted data.
    pub fn from_persisted(
        answers: Vec<ImpactValue>,
        taken_at: DateTime<Utc>,
    ) -> Result<Self, SnapshotError> {
        Self::new(answers, taken_at)
    }

    #[must_use]
    pub fn answers(&self) -> &[ImpactValue] {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<ImpactValue> {
        self.answers.get(index).copied()
    }

    #[must_use]
    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn accepts_a_full_answer_sequence() {
        let snapshot = AnswerSnapshot::new(vec![4; 7], fixed_now()).unwrap();
        assert_eq!(snapshot.answers(), &[4, 4, 4, 4, 4, 4, 4]);
        assert_eq!(snapshot.taken_at(), fixed_now());
    }

    #[test]
    fn accepts_unanswered_entries() {
        let snapshot = AnswerSnapshot::new(vec![1, 0, 2, 0, 3, 0, 4], fixed_now()).unwrap();
        assert_eq!(snapshot.answer(1), Some(0));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = AnswerSnapshot::new(vec![1, 2], fixed_now()).unwrap_err();
        assert_eq!(
            err,
            SnapshotError::LengthMismatch {
                expected: 7,
                got: 2
            }
        );
    }

    #[test]
    fn rejects_values_not_offered() {
        let err = AnswerSnapshot::new(vec![1, 2, 3, 4, 5, 1, 1], fixed_now()).unwrap_err();
        assert_eq!(err, SnapshotError::ValueNotOffered { index: 4, value: 5 });
    }
}
