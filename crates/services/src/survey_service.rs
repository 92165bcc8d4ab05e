use std::sync::Arc;

use eco_core::Clock;
use eco_core::model::{AnswerSnapshot, ImpactValue};
use storage::repository::{SnapshotRepository, StorageError};

use crate::error::SurveyError;

/// Binds survey persistence to the injected snapshot slot.
///
/// Submission writes the raw answer sequence verbatim (full overwrite); there
/// is exactly one writer, so last-write-wins is the whole story.
#[derive(Clone)]
pub struct SurveyService {
    clock: Clock,
    snapshots: Arc<dyn SnapshotRepository>,
}

impl SurveyService {
    #[must_use]
    pub fn new(clock: Clock, snapshots: Arc<dyn SnapshotRepository>) -> Self {
        Self { clock, snapshots }
    }

    /// Persists the answers as the new snapshot, replacing any prior one.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError::Snapshot` if the answers do not line up with the
    /// question list, or `SurveyError::Storage` if the slot cannot be written.
    pub async fn submit(
        &self,
        answers: Vec<ImpactValue>,
    ) -> Result<AnswerSnapshot, SurveyError> {
        let snapshot = AnswerSnapshot::new(answers, self.clock.now())?;
        self.snapshots.save(&snapshot).await?;
        Ok(snapshot)
    }

    /// The stored snapshot, or `None` when the slot is empty or holds a
    /// payload that no longer decodes/validates. Malformed data means "no
    /// survey taken" and routes the user back to the quiz, never an error.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError::Storage` only for real storage failures
    /// (connection problems), never for malformed payloads.
    pub async fn latest(&self) -> Result<Option<AnswerSnapshot>, SurveyError> {
        let record = match self.snapshots.load().await {
            Ok(record) => record,
            Err(StorageError::Serialization(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(record.and_then(|record| record.into_snapshot().ok()))
    }
}
