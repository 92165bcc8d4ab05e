//! Shared error types for the services crate.

use thiserror::Error;

use eco_core::model::{DayError, ImpactValue, SnapshotError};
use storage::repository::StorageError;

/// Errors emitted by `SurveyService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SurveyError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("value {value} is not offered by the current question")]
    ValueNotOffered { value: ImpactValue },
}

/// Errors emitted by `GameSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("the game is already complete")]
    Completed,
}

/// Errors emitted by the tracker workflow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackerError {
    #[error("complete the survey before using the tracker")]
    SurveyMissing,
    #[error(transparent)]
    Day(#[from] DayError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
