use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

use crate::repository::{SnapshotRecord, SnapshotRepository, StorageError};
use eco_core::model::{AnswerSnapshot, ImpactValue};

use super::SqliteRepository;

#[async_trait]
impl SnapshotRepository for SqliteRepository {
    async fn load(&self) -> Result<Option<SnapshotRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT answers, taken_at
            FROM survey_snapshots
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let answers_json: String = row
            .try_get("answers")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let taken_at: DateTime<Utc> = row
            .try_get("taken_at")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        let answers: Vec<ImpactValue> = serde_json::from_str(&answers_json)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        Ok(Some(SnapshotRecord { answers, taken_at }))
    }

    async fn save(&self, snapshot: &AnswerSnapshot) -> Result<(), StorageError> {
        let answers_json = serde_json::to_string(snapshot.answers())
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO survey_snapshots (id, answers, taken_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                answers = excluded.answers,
                taken_at = excluded.taken_at
            ",
        )
        .bind(1_i64)
        .bind(answers_json)
        .bind(snapshot.taken_at())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM survey_snapshots WHERE id = 1")
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}
