use std::sync::Arc;

use storage::repository::{SnapshotRepository, StorageError};

use super::board::TrackerBoard;
use crate::error::TrackerError;

/// Builds tracker boards from the persisted snapshot.
///
/// The tracker only ever reads the slot; the quiz is the sole writer.
#[derive(Clone)]
pub struct TrackerService {
    snapshots: Arc<dyn SnapshotRepository>,
}

impl TrackerService {
    #[must_use]
    pub fn new(snapshots: Arc<dyn SnapshotRepository>) -> Self {
        Self { snapshots }
    }

    /// Loads the snapshot and builds a fresh board with day 1 selecting.
    ///
    /// An empty slot and a malformed payload both mean the survey has not
    /// been (usably) taken, surfaced as `TrackerError::SurveyMissing` so the
    /// UI can route back to the quiz.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::SurveyMissing` when no valid snapshot exists,
    /// or `TrackerError::Storage` for real storage failures.
    pub async fn initialize(&self) -> Result<TrackerBoard, TrackerError> {
        let record = match self.snapshots.load().await {
            Ok(record) => record,
            Err(StorageError::Serialization(_)) => return Err(TrackerError::SurveyMissing),
            Err(err) => return Err(err.into()),
        };
        let snapshot = record
            .and_then(|record| record.into_snapshot().ok())
            .ok_or(TrackerError::SurveyMissing)?;
        Ok(TrackerBoard::new(snapshot))
    }
}
