use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{ProgressRepository, StorageError};
use fluent_core::model::ChallengeIndex;

use super::SqliteRepository;

/// Key for the serialized completed-index list.
const COMPLETED_KEY: &str = "completed_indices";
/// Key for the serialized frontier pointer.
const CURRENT_KEY: &str = "current_index";

impl SqliteRepository {
    async fn load_entry(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM progress_entries WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let value: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(value))
    }

    async fn save_entry(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO progress_entries (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            ",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load_completed(&self) -> Result<Option<Vec<ChallengeIndex>>, StorageError> {
        let Some(raw) = self.load_entry(COMPLETED_KEY).await? else {
            return Ok(None);
        };
        let completed = serde_json::from_str(&raw)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(completed))
    }

    async fn save_completed(&self, completed: &[ChallengeIndex]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(completed)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.save_entry(COMPLETED_KEY, &raw).await
    }

    async fn load_current(&self) -> Result<Option<ChallengeIndex>, StorageError> {
        let Some(raw) = self.load_entry(CURRENT_KEY).await? else {
            return Ok(None);
        };
        let current = serde_json::from_str(&raw)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(current))
    }

    async fn save_current(&self, current: ChallengeIndex) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&current)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.save_entry(CURRENT_KEY, &raw).await
    }
}
