use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eco_core::model::{AnswerSnapshot, ImpactValue, SnapshotError};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape for the answer snapshot.
///
/// This mirrors the domain `AnswerSnapshot` so repositories can
/// serialize/deserialize without leaking storage concerns into the domain
/// layer.
#[derive(Debug, Clone)]
pub struct SnapshotRecord {
    pub answers: Vec<ImpactValue>,
    pub taken_at: DateTime<Utc>,
}

impl SnapshotRecord {
    #[must_use]
    pub fn from_snapshot(snapshot: &AnswerSnapshot) -> Self {
        Self {
            answers: snapshot.answers().to_vec(),
            taken_at: snapshot.taken_at(),
        }
    }

    /// Convert the record back into a domain `AnswerSnapshot`.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError` if the stored answers fail validation.
    pub fn into_snapshot(self) -> Result<AnswerSnapshot, SnapshotError> {
        AnswerSnapshot::from_persisted(self.answers, self.taken_at)
    }
}

/// Repository contract for the single durable survey snapshot slot.
///
/// There is exactly one writer (quiz submission) and saves are full
/// overwrites, so last-write-wins is all the consistency this needs.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Fetch the stored snapshot record, or `None` when no survey was taken.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be read.
    async fn load(&self) -> Result<Option<SnapshotRecord>, StorageError>;

    /// Persist the snapshot, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be stored.
    async fn save(&self, snapshot: &AnswerSnapshot) -> Result<(), StorageError>;

    /// Clear the slot, routing the user back to the survey.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be cleared.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    slot: Arc<Mutex<Option<SnapshotRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl SnapshotRepository for InMemoryRepository {
    async fn load(&self) -> Result<Option<SnapshotRecord>, StorageError> {
        let guard = self
            .slot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save(&self, snapshot: &AnswerSnapshot) -> Result<(), StorageError> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(SnapshotRecord::from_snapshot(snapshot));
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Aggregates the snapshot repository behind a trait object for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub snapshots: Arc<dyn SnapshotRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let snapshots: Arc<dyn SnapshotRepository> = Arc::new(repo);
        Self { snapshots }
    }
}
